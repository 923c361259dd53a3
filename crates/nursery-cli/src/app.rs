//! Session setup and scripted runs

use crate::command::{parse_command, CommandError, ShellCommand};
use nursery_core::{
    CheckoutAcknowledgement, Outcome, Snapshot, Storefront, StorefrontConfig, StorefrontError,
};
use serde::Serialize;
use std::path::PathBuf;

/// Global command-line options
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// TOML config file
    pub config: Option<PathBuf>,
    /// Catalog document; overrides the config's `catalog_path`
    pub catalog: Option<PathBuf>,
}

/// Build a session from command-line options
///
/// # Errors
/// Returns config or catalog load errors
pub fn build_storefront(options: &AppOptions) -> Result<Storefront, StorefrontError> {
    let mut config = match &options.config {
        Some(path) => StorefrontConfig::load(path)?,
        None => StorefrontConfig::default(),
    };
    if let Some(catalog) = &options.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    Storefront::from_config(config)
}

/// A script line that failed to parse
#[derive(Debug, thiserror::Error)]
#[error("command {index} ('{command}'): {source}")]
pub struct ScriptError {
    /// 1-based position in the script
    pub index: usize,
    /// Raw command text
    pub command: String,
    /// Parse failure
    #[source]
    pub source: CommandError,
}

/// Final state of a scripted run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// State after the last command
    pub snapshot: Snapshot,
    /// Acknowledgements from `checkout` commands, in order
    pub checkouts: Vec<CheckoutAcknowledgement>,
}

/// Apply commands in order, stopping at `quit`.
///
/// Display-only commands (`show`, `help`) are skipped.
///
/// # Errors
/// Returns the first unparseable command; earlier commands stay applied
pub fn run_script<I, S>(store: &mut Storefront, commands: I) -> Result<ScriptReport, ScriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut checkouts = Vec::new();

    for (index, command) in commands.into_iter().enumerate() {
        let command = command.as_ref();
        let parsed = parse_command(command).map_err(|source| ScriptError {
            index: index + 1,
            command: command.to_string(),
            source,
        })?;

        match parsed {
            Some(ShellCommand::Action(action)) => {
                if let Outcome::CheckedOut(ack) = store.dispatch(action) {
                    checkouts.push(ack);
                }
            }
            Some(ShellCommand::Quit) => break,
            Some(ShellCommand::Show | ShellCommand::Help) | None => {}
        }
    }

    Ok(ScriptReport {
        snapshot: store.snapshot(),
        checkouts,
    })
}

/// Catalog screen without touching the caller's view
#[must_use]
pub fn catalog_screen(store: &Storefront) -> String {
    let snapshot = Snapshot {
        view: nursery_core::View::Browse,
        ..store.snapshot()
    };
    crate::render::Screen::new(store.config(), store.catalog(), &snapshot).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_catalog::ItemId;
    use nursery_core::View;
    use rust_decimal::Decimal;

    #[test]
    fn script_applies_in_order() {
        let mut store = Storefront::paradise_nursery();
        let report = run_script(&mut store, ["add 2", "add 2", "set 2 5", "cart"]).unwrap();

        assert_eq!(report.snapshot.view, View::Cart);
        assert_eq!(report.snapshot.cart.total_quantity, 5);
        assert_eq!(report.snapshot.cart.total_cost, Decimal::new(9495, 2));
        assert!(report.checkouts.is_empty());
    }

    #[test]
    fn script_collects_checkouts_and_stops_at_quit() {
        let mut store = Storefront::paradise_nursery();
        let report = run_script(&mut store, ["add 1", "checkout", "quit", "add 1"]).unwrap();

        assert_eq!(report.checkouts.len(), 1);
        assert_eq!(report.checkouts[0].total_cost, Decimal::new(2599, 2));
        assert_eq!(store.cart().quantity_of(ItemId(1)), 1);
    }

    #[test]
    fn script_error_names_position() {
        let mut store = Storefront::paradise_nursery();
        let err = run_script(&mut store, ["add 2", "fly 2"]).unwrap_err();

        assert_eq!(err.index, 2);
        assert_eq!(err.command, "fly 2");
        assert!(err.to_string().starts_with("command 2 ('fly 2')"));
        assert_eq!(store.total_quantity(), 1);
    }

    #[test]
    fn catalog_screen_keeps_view() {
        let mut store = Storefront::paradise_nursery();
        store.navigate_to(View::Cart);
        let out = catalog_screen(&store);
        assert!(out.contains("Our Plant Collection"));
        assert_eq!(store.view(), View::Cart);
    }

    #[test]
    fn catalog_option_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.json");
        std::fs::write(
            &path,
            r#"{"categories": [{"name": "Cacti", "items": [{"id": 1, "name": "Saguaro", "price": 99.0}]}]}"#,
        )
        .unwrap();

        let options = AppOptions {
            config: None,
            catalog: Some(path),
        };
        let store = build_storefront(&options).unwrap();
        assert_eq!(store.catalog().len(), 1);
    }

    #[test]
    fn missing_catalog_fails_setup() {
        let options = AppOptions {
            config: None,
            catalog: Some(PathBuf::from("/nonexistent/plants.toml")),
        };
        assert!(matches!(
            build_storefront(&options),
            Err(StorefrontError::Catalog(_))
        ));
    }
}
