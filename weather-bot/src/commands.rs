//! Command table: which slash commands the bot answers, registered as data rather than match arms.

/// How `/weather` obtains its city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherMode {
    /// Ask for a city and treat the chat's next plain-text message as the city name.
    PromptForCity,
    /// Query this city immediately.
    FixedCity(String),
}

/// What a registered command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Start,
    Weather,
    Help,
    Photo,
}

/// One registered command. `name` is matched case-sensitively against the command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub action: CommandAction,
}

const START: CommandSpec = CommandSpec {
    name: "start",
    description: "start the bot",
    action: CommandAction::Start,
};

const WEATHER: CommandSpec = CommandSpec {
    name: "weather",
    description: "get the weather",
    action: CommandAction::Weather,
};

const HELP: CommandSpec = CommandSpec {
    name: "help",
    description: "show this message",
    action: CommandAction::Help,
};

const PHOTO: CommandSpec = CommandSpec {
    name: "photo",
    description: "send a picture",
    action: CommandAction::Photo,
};

/// Ordered set of registered commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    commands: Vec<CommandSpec>,
}

impl CommandTable {
    /// The base commands: start, weather, help.
    pub fn new() -> Self {
        Self {
            commands: vec![START, WEATHER, HELP],
        }
    }

    /// Registers `/photo`. Registering twice has no effect.
    pub fn with_photo(mut self) -> Self {
        if self.lookup(PHOTO.name).is_none() {
            self.commands.push(PHOTO);
        }
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }

    /// Reply text for `/help`, one line per registered command.
    pub fn help_text(&self) -> String {
        let mut text = String::from("Available commands:");
        for command in &self.commands {
            text.push_str(&format!("\n/{} - {}", command.name, command.description));
        }
        text
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_table() {
        let table = CommandTable::new();
        assert_eq!(table.names(), vec!["start", "weather", "help"]);
        assert!(table.lookup("photo").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = CommandTable::new();
        assert_eq!(table.lookup("weather").map(|c| c.action), Some(CommandAction::Weather));
        assert!(table.lookup("Weather").is_none());
        assert!(table.lookup("WEATHER").is_none());
    }

    #[test]
    fn test_with_photo_registers_once() {
        let table = CommandTable::new().with_photo().with_photo();
        assert_eq!(table.names(), vec!["start", "weather", "help", "photo"]);
    }

    #[test]
    fn test_help_lists_registered_commands() {
        let help = CommandTable::new().help_text();
        assert_eq!(
            help,
            "Available commands:\n/start - start the bot\n/weather - get the weather\n/help - show this message"
        );
        assert!(CommandTable::new().with_photo().help_text().contains("/photo - send a picture"));
    }
}
