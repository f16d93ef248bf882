use clap::ValueEnum;
use testmap_js::Interface;

/// Mocha interface selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UiArg {
    /// describe / it / before / after
    Bdd,
    /// suite / test / suiteSetup / setup
    Tdd,
}

impl From<UiArg> for Interface {
    fn from(ui: UiArg) -> Self {
        match ui {
            UiArg::Bdd => Interface::Bdd,
            UiArg::Tdd => Interface::Tdd,
        }
    }
}
