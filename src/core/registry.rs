use crate::core::{Animal, Storage};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation;

/// In-memory pet registry backed by a whole-collection [`Storage`].
pub struct Registry<S: Storage> {
    storage: S,
    animals: Vec<Animal>,
    animal_counter: usize,
    date_format: String,
}

impl<S: Storage> Registry<S> {
    /// Loads the stored collection. Unreadable data is logged and replaced by an
    /// empty registry; only an unusable `date_format` is an error.
    pub fn open(storage: S, date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        validation::validate_date_format("date_format", &date_format)?;

        let animals = match storage.load() {
            Ok(animals) => animals,
            Err(e) => {
                tracing::error!("Can`t upload data from file: {}", e);
                Vec::new()
            }
        };
        let animal_counter = animals.len();
        tracing::info!("Registry opened with {} animals", animal_counter);

        Ok(Self {
            storage,
            animals,
            animal_counter,
            date_format,
        })
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add_animal(&mut self, animal: Animal) {
        tracing::info!("Adding {} '{}'", animal.genus(), animal.name());
        self.animals.push(animal);
        self.animal_counter += 1;
        self.persist();
    }

    /// First case-insensitive exact name match.
    pub fn find_animal_by_name(&self, name: &str) -> Option<&Animal> {
        let found = self.animals.iter().find(|animal| animal.has_name(name));
        tracing::debug!("Lookup '{}': found={}", name, found.is_some());
        found
    }

    pub fn list_commands(&self, animal: &Animal) -> String {
        let mut report = format!("List of commands for {}:", animal.name());
        for command in animal.commands() {
            report.push('\n');
            report.push_str(command);
        }
        report
    }

    /// Appends `command` to the first animal named `name` and saves the registry.
    pub fn teach_new_command(&mut self, name: &str, command: impl Into<String>) -> Result<&Animal> {
        let command = command.into();
        let index = self
            .animals
            .iter()
            .position(|animal| animal.has_name(name))
            .ok_or_else(|| RegistryError::AnimalNotFound {
                name: name.to_string(),
            })?;

        tracing::info!("Teaching '{}' to '{}'", command, self.animals[index].name());
        self.animals[index].teach_new_command(command);
        self.persist();

        Ok(&self.animals[index])
    }

    /// Sorts the stored collection by birthdate (stable, in place) and renders it.
    /// The new order is written on the next save.
    pub fn list_animals_by_birth_date(&mut self) -> String {
        self.animals.sort_by_key(Animal::birth_date);

        let mut report = String::from("List of animals, by birthdate:");
        for animal in &self.animals {
            report.push_str(&format!(
                "\nNickname: {}, Genus: {}, Date of Birth: {}",
                animal.name(),
                animal.genus(),
                animal.birth_date().format(&self.date_format)
            ));
        }
        report
    }

    pub fn total_animal_count(&self) -> usize {
        self.animal_counter
    }

    pub fn show_total_animal_count(&self) -> String {
        format!("Total animals quantity: {}", self.animal_counter)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.animals) {
            tracing::error!(
                "Failed to save {} animals, changes kept in memory only: {:?}",
                self.animals.len(),
                e
            );
        }
    }
}
