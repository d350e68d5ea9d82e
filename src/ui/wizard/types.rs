//! Type definitions for the campaign wizard

/// The five logical sub-steps shown in the progress rail.
///
/// There are only four numeric steps; the review sub-mode of step 2 gets its
/// own rail position, which is why `ReviewInfo` maps to step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubStep {
    ChooseType,
    UploadInfo,
    ReviewInfo,
    Integrations,
    EmailSetup,
}

impl SubStep {
    pub fn all() -> &'static [SubStep] {
        &[
            SubStep::ChooseType,
            SubStep::UploadInfo,
            SubStep::ReviewInfo,
            SubStep::Integrations,
            SubStep::EmailSetup,
        ]
    }

    /// Position in the progress rail, 1..=5
    pub fn id(self) -> u8 {
        match self {
            SubStep::ChooseType => 1,
            SubStep::UploadInfo => 2,
            SubStep::ReviewInfo => 3,
            SubStep::Integrations => 4,
            SubStep::EmailSetup => 5,
        }
    }

    /// Whether this sub-step is the highlighted one for the given state.
    ///
    /// The email draft sub-mode of step 4 highlights nothing; the original
    /// product behaves that way and it is kept for parity.
    pub fn is_active(self, current_step: u8, review_mode: bool, email_draft_mode: bool) -> bool {
        match self {
            SubStep::ChooseType => current_step == 1,
            SubStep::UploadInfo => current_step == 2 && !review_mode,
            SubStep::ReviewInfo => current_step == 2 && review_mode,
            SubStep::Integrations => current_step == 3,
            SubStep::EmailSetup => current_step == 4 && !email_draft_mode,
        }
    }

    /// Whether this sub-step reads as completed in the progress rail.
    ///
    /// Rail ids 1..=5 are compared against the 1..=4 step counter, so
    /// `ReviewInfo` reads completed from step 3 onward and `EmailSetup`
    /// never does. Kept for visual parity with the original product.
    pub fn is_completed(self, current_step: u8) -> bool {
        current_step > self.id()
    }
}

/// Derived progress rail entry handed to the renderer
#[derive(Debug, Clone)]
pub struct SubStepState {
    pub id: u8,
    pub title: String,
    pub active: bool,
    pub completed: bool,
}

/// Result of wizard key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// Keep running
    Continue,
    /// Quit without launching
    Cancel,
    /// Campaign launched; exit with the given summary
    Launch(String),
}

/// A campaign or tracking rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: u32,
    pub text: String,
}

/// Next id for a rule list: max of existing ids plus one, 1 when empty
pub fn next_rule_id(rules: &[Rule]) -> u32 {
    rules.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

/// A simulated file upload
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: u64,
    pub name: String,
    pub progress: u8,
    pub uploading: bool,
}

/// Which rule list a rule editor targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    Campaign,
    Tracking,
}

/// Focus within the campaign info step (both tabs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFocus {
    ProductUrl,
    FileList,
    ExistingFilter,
    ExistingList,
}

impl InfoFocus {
    /// True for the foci on the "New Product" tab
    pub fn on_new_product_tab(self) -> bool {
        matches!(self, InfoFocus::ProductUrl | InfoFocus::FileList)
    }
}

/// Focus within the review sub-mode of step 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFocus {
    ProductName,
    Description,
    Rules,
}

/// Focus within the integrations step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationsFocus {
    SheetToggle,
    SheetUrl,
    Tracking,
}

/// Focus within the email setup step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Providers,
    Search,
    Connected,
}

/// Focus within the email draft sub-mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFocus {
    Subject,
    Body,
}
