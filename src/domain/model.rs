use crate::utils::error::RegistryError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
    Hamster,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Hamster];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Hamster => "Hamster",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, surrounding whitespace ignored.
impl FromStr for Species {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownSpecies {
                input: s.to_string(),
            })
    }
}

/// A registered pet. The species tag is written as `type` in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    #[serde(rename = "type")]
    species: Species,
    name: String,
    #[serde(rename = "birthDate")]
    birth_date: NaiveDate,
    #[serde(default)]
    commands: Vec<String>,
}

impl Animal {
    pub fn new(species: Species, name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            species,
            name: name.into(),
            birth_date,
            commands: Vec::new(),
        }
    }

    pub fn dog(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self::new(Species::Dog, name, birth_date)
    }

    pub fn cat(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self::new(Species::Cat, name, birth_date)
    }

    pub fn hamster(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self::new(Species::Hamster, name, birth_date)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Species label, e.g. "Dog".
    pub fn genus(&self) -> &'static str {
        self.species.as_str()
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Appends unconditionally; duplicates are kept.
    pub fn teach_new_command(&mut self, command: impl Into<String>) {
        self.commands.push(command.into());
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_species_parsing_ignores_case() {
        assert_eq!("Dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!(" HAMSTER ".parse::<Species>().unwrap(), Species::Hamster);
        assert!(matches!(
            "Frog".parse::<Species>(),
            Err(RegistryError::UnknownSpecies { .. })
        ));
    }

    #[test]
    fn test_new_animal_has_no_commands() {
        let rex = Animal::dog("Rex", date(2020, 1, 1));
        assert!(rex.commands().is_empty());
        assert_eq!(rex.genus(), "Dog");
        assert_eq!(rex.birth_date(), date(2020, 1, 1));
    }

    #[test]
    fn test_teach_keeps_order_and_duplicates() {
        let mut tom = Animal::cat("Tom", date(2019, 5, 5));
        tom.teach_new_command("sit");
        tom.teach_new_command("jump");
        tom.teach_new_command("sit");
        assert_eq!(tom.commands(), ["sit", "jump", "sit"]);
    }

    #[test]
    fn test_has_name_is_case_insensitive() {
        let rex = Animal::dog("Rex", date(2020, 1, 1));
        assert!(rex.has_name("rex"));
        assert!(rex.has_name("REX"));
        assert!(!rex.has_name("Rexy"));
    }

    #[test]
    fn test_json_shape() {
        let mut hammy = Animal::hamster("Hammy", date(2022, 3, 9));
        hammy.teach_new_command("roll");

        let value = serde_json::to_value(&hammy).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "Hamster",
                "name": "Hammy",
                "birthDate": "2022-03-09",
                "commands": ["roll"]
            })
        );
    }

    #[test]
    fn test_missing_commands_default_to_empty() {
        let animal: Animal =
            serde_json::from_str(r#"{"type":"Cat","name":"Tom","birthDate":"2019-05-05"}"#)
                .unwrap();
        assert_eq!(animal.species(), Species::Cat);
        assert!(animal.commands().is_empty());
    }
}
