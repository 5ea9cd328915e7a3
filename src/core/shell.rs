use crate::core::registry::Registry;
use crate::core::{Animal, Species, Storage};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::date_format_hint;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "1 -> Add new animal
2 -> Animal`s list of commands
3 -> Teach new command
4 -> List of animals by birthdate
5 -> Total quantity of animals
0 -> Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddAnimal,
    ListCommands,
    TeachCommand,
    ListByBirthDate,
    TotalCount,
}

impl FromStr for MenuChoice {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u8>() {
            Ok(0) => Ok(MenuChoice::Exit),
            Ok(1) => Ok(MenuChoice::AddAnimal),
            Ok(2) => Ok(MenuChoice::ListCommands),
            Ok(3) => Ok(MenuChoice::TeachCommand),
            Ok(4) => Ok(MenuChoice::ListByBirthDate),
            Ok(5) => Ok(MenuChoice::TotalCount),
            _ => Err(RegistryError::InvalidChoice {
                input: s.to_string(),
            }),
        }
    }
}

pub fn parse_birth_date(input: &str, format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), format).map_err(|_| RegistryError::InvalidDate {
        input: input.to_string(),
        format: format.to_string(),
    })
}

enum Step {
    Continue,
    Exit,
}

/// Numbered-menu console session over a [`Registry`].
pub struct RegistryShell<'a, S: Storage, R: BufRead, W: Write> {
    registry: &'a mut Registry<S>,
    input: R,
    output: W,
}

impl<'a, S: Storage, R: BufRead, W: Write> RegistryShell<'a, S, R, W> {
    pub fn new(registry: &'a mut Registry<S>, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt(&format!("{}Your choice: ", MENU))? else {
                tracing::info!("Input closed, leaving menu");
                return self.farewell();
            };

            let step = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    tracing::warn!("{}", e);
                    writeln!(self.output, "{}", e.user_friendly_message())?;
                    Step::Continue
                }
            };

            if let Step::Exit = step {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step> {
        tracing::debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::AddAnimal => self.add_animal(),
            MenuChoice::ListCommands => self.list_commands(),
            MenuChoice::TeachCommand => self.teach_command(),
            MenuChoice::ListByBirthDate => {
                let report = self.registry.list_animals_by_birth_date();
                writeln!(self.output, "{}", report)?;
                Ok(Step::Continue)
            }
            MenuChoice::TotalCount => {
                writeln!(self.output, "{}", self.registry.show_total_animal_count())?;
                Ok(Step::Continue)
            }
            MenuChoice::Exit => {
                self.farewell()?;
                Ok(Step::Exit)
            }
        }
    }

    fn add_animal(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter nickname: ")? else {
            return self.close();
        };
        let Some(genus) = self.prompt("Enter type (Cat, Dog or Hamster): ")? else {
            return self.close();
        };
        let date_prompt = format!(
            "Enter birthdate ({}): ",
            date_format_hint(self.registry.date_format())
        );
        let Some(date_input) = self.prompt(&date_prompt)? else {
            return self.close();
        };

        let birth_date = match parse_birth_date(&date_input, self.registry.date_format()) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!("{}, using today's date", e);
                writeln!(self.output, "{}", e.user_friendly_message())?;
                Local::now().date_naive()
            }
        };

        match genus.parse::<Species>() {
            Ok(species) => {
                self.registry
                    .add_animal(Animal::new(species, name, birth_date));
                writeln!(self.output, "Animal successfully added")?;
            }
            Err(e) => {
                tracing::warn!("{}", e);
                writeln!(self.output, "{}", e.user_friendly_message())?;
            }
        }
        Ok(Step::Continue)
    }

    fn list_commands(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter nickname: ")? else {
            return self.close();
        };

        match self.registry.find_animal_by_name(&name) {
            Some(animal) => {
                let report = self.registry.list_commands(animal);
                writeln!(self.output, "{}", report)?;
            }
            None => self.not_found(&name)?,
        }
        Ok(Step::Continue)
    }

    fn teach_command(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter nickname: ")? else {
            return self.close();
        };

        if self.registry.find_animal_by_name(&name).is_none() {
            self.not_found(&name)?;
            return Ok(Step::Continue);
        }

        let Some(command) = self.prompt("Enter command which you want to teach: ")? else {
            return self.close();
        };

        let animal = self.registry.teach_new_command(&name, command.as_str())?;
        writeln!(self.output, "Command '{}' studied by {}", command, animal.name())?;
        Ok(Step::Continue)
    }

    fn not_found(&mut self, name: &str) -> Result<()> {
        let e = RegistryError::AnimalNotFound {
            name: name.to_string(),
        };
        tracing::debug!("{}", e);
        writeln!(self.output, "{}", e.user_friendly_message())?;
        Ok(())
    }

    /// Input ended in the middle of a sub-flow.
    fn close(&mut self) -> Result<Step> {
        tracing::info!("Input closed during a prompt");
        self.farewell()?;
        Ok(Step::Exit)
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Bye bye...")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `text` without a newline and reads one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::JsonFileStorage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(registry: &mut Registry<JsonFileStorage>, script: &str) -> String {
        let mut output = Vec::new();
        RegistryShell::new(registry, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn temp_registry(temp_dir: &TempDir) -> Registry<JsonFileStorage> {
        let storage = JsonFileStorage::new(temp_dir.path().join("animal_data.json"));
        Registry::open(storage, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("0".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!(" 4 ".parse::<MenuChoice>().unwrap(), MenuChoice::ListByBirthDate);
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("-1".parse::<MenuChoice>().is_err());
        assert!("abc".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(
            parse_birth_date("2020-01-01", "%Y-%m-%d").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert!(matches!(
            parse_birth_date("01/01/2020", "%Y-%m-%d"),
            Err(RegistryError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_menu_is_printed_and_exit_says_goodbye() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = temp_registry(&temp_dir);

        let output = run_script(&mut registry, "0\n");
        assert!(output.starts_with(
            "1 -> Add new animal\n\
             2 -> Animal`s list of commands\n\
             3 -> Teach new command\n\
             4 -> List of animals by birthdate\n\
             5 -> Total quantity of animals\n\
             0 -> Exit\n\
             Your choice: "
        ));
        assert!(output.ends_with("Bye bye...\n"));
    }

    #[test]
    fn test_incorrect_choice_returns_to_menu() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = temp_registry(&temp_dir);

        let output = run_script(&mut registry, "9\nhello\n0\n");
        assert_eq!(output.matches("Incorrect choice. Please repeat").count(), 2);
        assert_eq!(output.matches("Your choice: ").count(), 3);
    }

    #[test]
    fn test_unknown_species_aborts_add() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = temp_registry(&temp_dir);

        let output = run_script(&mut registry, "1\nKermit\nFrog\n2015-01-01\n0\n");
        assert!(output.contains("Incorrect animal genus"));
        assert!(!output.contains("Animal successfully added"));
        assert_eq!(registry.total_animal_count(), 0);
    }

    #[test]
    fn test_bad_date_falls_back_to_today() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = temp_registry(&temp_dir);

        let output = run_script(&mut registry, "1\nRex\ndog\nyesterday\n0\n");
        assert!(output.contains("Incorrect data format. Please enter birthdate YYYY-MM-DD"));
        assert!(output.contains("Animal successfully added"));

        let rex = registry.find_animal_by_name("rex").unwrap();
        assert_eq!(rex.species(), Species::Dog);
        let today = Local::now().date_naive();
        assert!((rex.birth_date() - today).num_days().abs() <= 1);
    }

    #[test]
    fn test_lookup_of_missing_animal() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = temp_registry(&temp_dir);

        let output = run_script(&mut registry, "2\nGhost\n3\nGhost\n0\n");
        assert_eq!(output.matches("Animal not found").count(), 2);
        assert!(!output.contains("Enter command which you want to teach"));
    }

    #[test]
    fn test_end_of_input_inside_prompt_exits() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = temp_registry(&temp_dir);

        let output = run_script(&mut registry, "1\nRex\n");
        assert!(output.ends_with("Bye bye...\n"));
        assert_eq!(registry.total_animal_count(), 0);
    }

    #[test]
    fn test_end_of_input_at_menu_exits() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = temp_registry(&temp_dir);

        let output = run_script(&mut registry, "5\n");
        assert!(output.contains("Total animals quantity: 0"));
        assert!(output.ends_with("Bye bye...\n"));
    }

    #[test]
    fn test_date_prompt_follows_configured_format() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("animal_data.json"));
        let mut registry = Registry::open(storage, "%d.%m.%Y").unwrap();

        let script = "1\nRex\nDog\n02.01.2020\n\
                      1\nTom\nCat\n2019-05-05\n\
                      0\n";
        let output = run_script(&mut registry, script);
        assert!(output.contains("Enter birthdate (DD.MM.YYYY): "));
        assert!(output.contains("Incorrect data format. Please enter birthdate DD.MM.YYYY"));
        assert_eq!(
            registry.find_animal_by_name("Rex").unwrap().birth_date(),
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
        );
    }
}
