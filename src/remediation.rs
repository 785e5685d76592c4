//! Remedies offered when the library cannot be found.

use crate::config::{SdkSettings, CONFIG_FILE_NAME};
use crate::ui::UserInterface;

/// Everything download page.
pub const EVERYTHING_URL: &str = "https://www.voidtools.com/";

/// Everything SDK download page.
pub const SDK_URL: &str = "https://www.voidtools.com/support/everything/sdk/";

/// One actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remedy {
    /// Short headline.
    pub title: String,
    /// Instructions, one per line.
    pub steps: Vec<String>,
}

/// Produces the fixed list of remedies for a failed discovery.
pub struct RemediationAdvisor<'a> {
    settings: &'a SdkSettings,
}

impl<'a> RemediationAdvisor<'a> {
    /// Create an advisor that names the configured variable and library.
    pub fn new(settings: &'a SdkSettings) -> Self {
        Self { settings }
    }

    /// The remedies, most recommended first.
    pub fn remedies(&self) -> Vec<Remedy> {
        let var = &self.settings.env_var;
        let lib = &self.settings.library_name;

        vec![
            Remedy {
                title: "Install Everything (recommended)".to_string(),
                steps: vec![
                    format!("Visit: {}", EVERYTHING_URL),
                    "Download and install Everything".to_string(),
                    r"The DLL is installed to: C:\Program Files\Everything\".to_string(),
                ],
            },
            Remedy {
                title: "Set the environment variable".to_string(),
                steps: vec![
                    "PowerShell:".to_string(),
                    format!("  $env:{} = 'C:\\path\\to\\{}'", var, lib),
                    "Command Prompt:".to_string(),
                    format!("  set {}=C:\\path\\to\\{}", var, lib),
                ],
            },
            Remedy {
                title: "Download the Everything SDK".to_string(),
                steps: vec![
                    format!("Visit: {}", SDK_URL),
                    "Download the SDK and extract it into the project directory".to_string(),
                    format!("Place {} in the project root", lib),
                ],
            },
            Remedy {
                title: "Edit the configuration file".to_string(),
                steps: vec![
                    format!("Edit {}", CONFIG_FILE_NAME),
                    "Add your DLL path under sdk.search_paths".to_string(),
                ],
            },
        ]
    }

    /// Print the remedies through the UI.
    pub fn report(&self, ui: &mut dyn UserInterface) {
        ui.show_header("Suggested solutions");
        for (idx, remedy) in self.remedies().iter().enumerate() {
            ui.message(&format!("{}. {}:", idx + 1, remedy.title));
            for step in &remedy.steps {
                ui.message(&format!("   {}", step));
            }
            ui.message("");
        }
    }
}
