use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vistas de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Login,
    Events,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Login, View::Events];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::Events => "events",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Vista desconocida: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("events".parse::<View>(), Ok(View::Events));
        assert_eq!(View::Login.to_string(), "login");
        assert!("settings".parse::<View>().is_err());
    }
}
