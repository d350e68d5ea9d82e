//! Campaign creation wizard.
//!
//! Four numeric steps with two sub-modes: step 2 flips into a review view
//! after a simulated scan, step 4 flips into a draft view after simulated
//! email generation. The progress rail shows five logical sub-steps derived
//! from that state. Transition rules live here; rendering is in `steps/`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{widgets::ListState, Frame};

use crate::catalog::{Catalog, CampaignType, ConnectedEmail, ExistingProduct};
use crate::tasks::{Simulator, TaskOutcome};
use crate::ui::form_field::{TextField, TextEditor};

pub mod steps;
pub mod types;

pub use types::*;

#[cfg(test)]
mod tests;

/// Inline editor over one rule in either rule list
pub(crate) struct RuleEditor {
    pub target: RuleTarget,
    pub id: u32,
    pub field: TextField,
}

/// Which panel the wizard is showing, derived from the machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActiveView {
    ChooseType,
    OtherText,
    CampaignInfo,
    Review,
    Integrations,
    EmailSetup,
    EmailDraft,
}

/// The campaign creation wizard screen
pub struct WizardScreen {
    pub(crate) catalog: Catalog,
    simulator: Simulator,

    // Machine state
    current_step: u8,
    review_mode: bool,
    email_draft_mode: bool,
    scanning: bool,
    generating: bool,
    selected_campaign_type: Option<CampaignType>,
    pub(crate) other_text: TextField,

    // Step 1: campaign type cards
    pub(crate) type_state: ListState,

    // Step 2: upload and existing-product tabs
    pub(crate) info_focus: InfoFocus,
    pub(crate) product_url: TextField,
    pub(crate) uploads: Vec<UploadedFile>,
    next_upload_id: u64,
    pub(crate) upload_state: ListState,
    pub(crate) existing_filter: TextField,
    pub(crate) existing_state: ListState,

    // Step 2: review sub-mode
    pub(crate) review_focus: ReviewFocus,
    pub(crate) product_name: TextField,
    pub(crate) product_description: TextEditor,
    pub(crate) campaign_rules: Vec<Rule>,
    pub(crate) campaign_rule_state: ListState,

    // Step 3: integrations
    pub(crate) integrations_focus: IntegrationsFocus,
    pub(crate) sheet_enabled: bool,
    pub(crate) sheet_url: TextField,
    pub(crate) tracking_rules: Vec<Rule>,
    pub(crate) tracking_rule_state: ListState,

    // Shared inline rule editor
    pub(crate) rule_editor: Option<RuleEditor>,

    // Step 4: email setup
    pub(crate) setup_focus: SetupFocus,
    pub(crate) provider_state: ListState,
    pub(crate) email_search: TextField,
    pub(crate) connected_emails: Vec<ConnectedEmail>,
    pub(crate) email_state: ListState,
    next_email_id: u64,

    // Step 4: draft sub-mode
    pub(crate) draft_focus: DraftFocus,
    pub(crate) email_subject: TextField,
    pub(crate) email_body: TextEditor,
}

impl WizardScreen {
    pub fn new(catalog: Catalog, simulator: Simulator) -> Self {
        let mut type_state = ListState::default();
        type_state.select(Some(0));

        let mut existing_state = ListState::default();
        existing_state.select(Some(0));

        let mut provider_state = ListState::default();
        provider_state.select(Some(0));

        let mut email_state = ListState::default();
        email_state.select(Some(0));

        let connected_emails = catalog.default_connected_emails.clone();
        let tracking_rules = catalog
            .default_tracking_rules
            .iter()
            .map(|r| Rule {
                id: r.id,
                text: r.text.clone(),
            })
            .collect();
        let next_email_id = connected_emails.len() as u64 + 1;

        Self {
            catalog,
            simulator,
            current_step: 1,
            review_mode: false,
            email_draft_mode: false,
            scanning: false,
            generating: false,
            selected_campaign_type: None,
            other_text: TextField::new("Describe your campaign type"),
            type_state,
            info_focus: InfoFocus::ProductUrl,
            product_url: TextField::new("Paste a product page URL (optional)"),
            uploads: Vec::new(),
            next_upload_id: 1,
            upload_state: ListState::default(),
            existing_filter: TextField::new("Filter products"),
            existing_state,
            review_focus: ReviewFocus::ProductName,
            product_name: TextField::new("Product name"),
            product_description: TextEditor::new("Product description"),
            campaign_rules: Vec::new(),
            campaign_rule_state: ListState::default(),
            integrations_focus: IntegrationsFocus::SheetToggle,
            sheet_enabled: false,
            sheet_url: TextField::new("Paste your Google Sheet URL"),
            tracking_rules,
            tracking_rule_state: ListState::default(),
            rule_editor: None,
            setup_focus: SetupFocus::Providers,
            provider_state,
            email_search: TextField::new("Add an email address"),
            connected_emails,
            email_state,
            next_email_id,
            draft_focus: DraftFocus::Subject,
            email_subject: TextField::new("Subject"),
            email_body: TextEditor::new("Email body"),
        }
    }

    // ─── Machine state accessors ────────────────────────────────────────────

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn review_mode(&self) -> bool {
        self.review_mode
    }

    pub fn email_draft_mode(&self) -> bool {
        self.email_draft_mode
    }

    pub fn scanning(&self) -> bool {
        self.scanning
    }

    pub fn generating(&self) -> bool {
        self.generating
    }

    pub fn selected_campaign_type(&self) -> Option<CampaignType> {
        self.selected_campaign_type
    }

    // ─── Transitions ────────────────────────────────────────────────────────

    /// Move to the next step; no-op at step 4 or when the gate fails
    pub fn advance(&mut self) {
        if self.current_step < 4 && self.can_proceed() {
            self.current_step += 1;
        }
    }

    /// Move to the previous step; no-op at step 1.
    ///
    /// Sub-mode flags are deliberately left alone so returning to a step
    /// lands on the view the user left from.
    pub fn retreat(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Select a campaign type card (step 1 only)
    pub fn select_campaign_type(&mut self, kind: CampaignType) {
        if self.current_step == 1 {
            self.selected_campaign_type = Some(kind);
        }
    }

    /// Clear an "Other" selection, returning to the cards (step 1 only)
    pub fn clear_campaign_type(&mut self) {
        if self.current_step == 1 && self.selected_campaign_type == Some(CampaignType::Other) {
            self.selected_campaign_type = None;
        }
    }

    /// Start the simulated campaign info scan; no-op while one is in flight
    pub fn begin_scan(&mut self) {
        if self.current_step == 2 && !self.review_mode && !self.scanning {
            self.scanning = true;
            tracing::info!("campaign info scan started");
            self.simulator.begin_scan();
        }
    }

    /// Complete a scan: enter review mode with extracted defaults
    pub fn finish_scan(&mut self) {
        self.scanning = false;
        self.review_mode = true;
        self.product_name.set_value(&self.catalog.default_product_info.name);
        self.product_description
            .set_text(&self.catalog.default_product_info.description);
        self.campaign_rules = self
            .catalog
            .default_campaign_rules
            .iter()
            .map(|r| Rule {
                id: r.id,
                text: r.text.clone(),
            })
            .collect();
        if !self.campaign_rules.is_empty() {
            self.campaign_rule_state.select(Some(0));
        }
        tracing::info!("campaign info scan complete");
    }

    /// Start simulated email generation; requires a connected email
    pub fn begin_generate_email(&mut self) {
        if self.current_step == 4
            && !self.email_draft_mode
            && !self.generating
            && !self.connected_emails.is_empty()
        {
            self.generating = true;
            tracing::info!("email draft generation started");
            self.simulator.begin_generate_email();
        }
    }

    /// Complete email generation: enter draft mode with the seed copy
    pub fn finish_generate_email(&mut self) {
        self.generating = false;
        self.email_draft_mode = true;
        self.email_subject
            .set_value(&self.catalog.default_email_content.subject);
        self.email_body
            .set_text(&self.catalog.default_email_content.body);
        tracing::info!("email draft generation complete");
    }

    /// Leave review mode, back to the upload view (step 2 only)
    pub fn exit_review_mode(&mut self) {
        if self.current_step == 2 {
            self.review_mode = false;
        }
    }

    /// Leave draft mode, back to provider setup (step 4 only)
    pub fn exit_email_draft_mode(&mut self) {
        if self.current_step == 4 {
            self.email_draft_mode = false;
        }
    }

    /// Whether the current step's gate allows advancing.
    ///
    /// Only step 1 validates anything: a campaign type must be selected,
    /// and "Other" additionally needs non-blank free text.
    pub fn can_proceed(&self) -> bool {
        match self.current_step {
            1 => match self.selected_campaign_type {
                None => false,
                Some(CampaignType::Other) => !self.other_text.is_blank(),
                Some(_) => true,
            },
            _ => true,
        }
    }

    // ─── Derived view model ─────────────────────────────────────────────────

    /// Progress rail entries for the five logical sub-steps
    pub fn sub_steps(&self) -> Vec<SubStepState> {
        SubStep::all()
            .iter()
            .map(|&sub| SubStepState {
                id: sub.id(),
                title: self
                    .catalog
                    .steps
                    .get(usize::from(sub.id()) - 1)
                    .map(|s| s.title.clone())
                    .unwrap_or_default(),
                active: sub.is_active(self.current_step, self.review_mode, self.email_draft_mode),
                completed: sub.is_completed(self.current_step),
            })
            .collect()
    }

    /// The highlighted sub-step, if any (none while drafting the email)
    pub fn active_sub_step(&self) -> Option<SubStep> {
        SubStep::all()
            .iter()
            .copied()
            .find(|sub| sub.is_active(self.current_step, self.review_mode, self.email_draft_mode))
    }

    pub(crate) fn active_view(&self) -> ActiveView {
        match self.current_step {
            1 => {
                if self.selected_campaign_type == Some(CampaignType::Other) {
                    ActiveView::OtherText
                } else {
                    ActiveView::ChooseType
                }
            }
            2 => {
                if self.review_mode {
                    ActiveView::Review
                } else {
                    ActiveView::CampaignInfo
                }
            }
            3 => ActiveView::Integrations,
            _ => {
                if self.email_draft_mode {
                    ActiveView::EmailDraft
                } else {
                    ActiveView::EmailSetup
                }
            }
        }
    }

    /// Existing products matching the filter box, case-insensitively
    pub(crate) fn filtered_existing_products(&self) -> Vec<&ExistingProduct> {
        let needle = self.existing_filter.value().trim().to_lowercase();
        self.catalog
            .existing_products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Whether the scan action is available at the interaction layer
    pub(crate) fn scan_ready(&self) -> bool {
        self.uploads.iter().any(|f| !f.uploading)
    }

    // ─── Rule lists ─────────────────────────────────────────────────────────

    /// Append a campaign rule; returns the assigned id
    pub fn add_campaign_rule(&mut self, text: &str) -> u32 {
        let id = next_rule_id(&self.campaign_rules);
        self.campaign_rules.push(Rule {
            id,
            text: text.to_string(),
        });
        self.campaign_rule_state
            .select(Some(self.campaign_rules.len() - 1));
        id
    }

    pub fn remove_campaign_rule(&mut self, id: u32) {
        self.campaign_rules.retain(|r| r.id != id);
        clamp_selection(&mut self.campaign_rule_state, self.campaign_rules.len());
    }

    /// Append a tracking rule; returns the assigned id
    pub fn add_tracking_rule(&mut self, text: &str) -> u32 {
        let id = next_rule_id(&self.tracking_rules);
        self.tracking_rules.push(Rule {
            id,
            text: text.to_string(),
        });
        self.tracking_rule_state
            .select(Some(self.tracking_rules.len() - 1));
        id
    }

    pub fn remove_tracking_rule(&mut self, id: u32) {
        self.tracking_rules.retain(|r| r.id != id);
        clamp_selection(&mut self.tracking_rule_state, self.tracking_rules.len());
    }

    pub fn edit_rule(&mut self, target: RuleTarget, id: u32, text: &str) {
        let rules = match target {
            RuleTarget::Campaign => &mut self.campaign_rules,
            RuleTarget::Tracking => &mut self.tracking_rules,
        };
        if let Some(rule) = rules.iter_mut().find(|r| r.id == id) {
            rule.text = text.to_string();
        }
    }

    // ─── Simulated operation outcomes ───────────────────────────────────────

    /// Feed a completed simulated operation back into the machine
    pub fn apply_outcome(&mut self, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::ScanComplete => {
                if self.scanning {
                    self.finish_scan();
                }
            }
            TaskOutcome::EmailDraftComplete => {
                if self.generating {
                    self.finish_generate_email();
                }
            }
            TaskOutcome::UploadProgress { file_id, progress } => {
                if let Some(file) = self.uploads.iter_mut().find(|f| f.id == file_id) {
                    file.progress = progress;
                }
            }
            TaskOutcome::UploadComplete { file_id } => {
                if let Some(file) = self.uploads.iter_mut().find(|f| f.id == file_id) {
                    file.progress = 100;
                    file.uploading = false;
                }
            }
        }
    }

    // ─── Key handling ───────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) -> WizardResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return WizardResult::Cancel;
        }

        // A simulated operation is running; the overlay covers the panel
        if self.scanning || self.generating {
            return WizardResult::Continue;
        }

        if self.rule_editor.is_some() {
            self.handle_rule_editor_key(key.code);
            return WizardResult::Continue;
        }

        match self.active_view() {
            ActiveView::ChooseType => self.handle_choose_type_key(key.code),
            ActiveView::OtherText => self.handle_other_text_key(key.code),
            ActiveView::CampaignInfo => self.handle_campaign_info_key(key.code),
            ActiveView::Review => self.handle_review_key(key),
            ActiveView::Integrations => self.handle_integrations_key(key.code),
            ActiveView::EmailSetup => self.handle_email_setup_key(key.code),
            ActiveView::EmailDraft => self.handle_email_draft_key(key),
        }
    }

    fn handle_choose_type_key(&mut self, key: KeyCode) -> WizardResult {
        let len = self.catalog.campaign_types.len();
        match key {
            KeyCode::Up | KeyCode::Char('k') => select_prev(&mut self.type_state, len),
            KeyCode::Down | KeyCode::Char('j') => select_next(&mut self.type_state, len),
            KeyCode::Char(' ') => {
                if let Some(kind) = self.highlighted_campaign_type() {
                    self.select_campaign_type(kind);
                }
            }
            KeyCode::Enter => {
                if let Some(kind) = self.highlighted_campaign_type() {
                    self.select_campaign_type(kind);
                }
                // "Other" needs its free text before it can pass the gate
                self.advance();
            }
            KeyCode::Esc => return WizardResult::Cancel,
            _ => {}
        }
        WizardResult::Continue
    }

    fn handle_other_text_key(&mut self, key: KeyCode) -> WizardResult {
        match key {
            KeyCode::Esc => self.clear_campaign_type(),
            KeyCode::Enter => self.advance(),
            other => {
                self.other_text.handle_key(other);
            }
        }
        WizardResult::Continue
    }

    fn handle_campaign_info_key(&mut self, key: KeyCode) -> WizardResult {
        match key {
            KeyCode::Esc => {
                self.retreat();
                return WizardResult::Continue;
            }
            KeyCode::Tab => {
                self.info_focus = match self.info_focus {
                    InfoFocus::ProductUrl => InfoFocus::FileList,
                    InfoFocus::FileList => InfoFocus::ExistingFilter,
                    InfoFocus::ExistingFilter => InfoFocus::ExistingList,
                    InfoFocus::ExistingList => InfoFocus::ProductUrl,
                };
                return WizardResult::Continue;
            }
            KeyCode::BackTab => {
                self.info_focus = match self.info_focus {
                    InfoFocus::ProductUrl => InfoFocus::ExistingList,
                    InfoFocus::FileList => InfoFocus::ProductUrl,
                    InfoFocus::ExistingFilter => InfoFocus::FileList,
                    InfoFocus::ExistingList => InfoFocus::ExistingFilter,
                };
                return WizardResult::Continue;
            }
            _ => {}
        }

        match self.info_focus {
            InfoFocus::ProductUrl => match key {
                KeyCode::Enter => {
                    if self.scan_ready() {
                        self.begin_scan();
                    }
                }
                other => {
                    self.product_url.handle_key(other);
                }
            },
            InfoFocus::FileList => match key {
                KeyCode::Up => select_prev(&mut self.upload_state, self.uploads.len()),
                KeyCode::Down => select_next(&mut self.upload_state, self.uploads.len()),
                KeyCode::Char('u') => self.add_upload(),
                KeyCode::Char('d') | KeyCode::Delete => self.remove_selected_upload(),
                KeyCode::Enter => {
                    if self.scan_ready() {
                        self.begin_scan();
                    }
                }
                _ => {}
            },
            InfoFocus::ExistingFilter => match key {
                KeyCode::Enter => self.choose_selected_existing(),
                KeyCode::Up => {
                    let len = self.filtered_existing_products().len();
                    select_prev(&mut self.existing_state, len);
                }
                KeyCode::Down => {
                    let len = self.filtered_existing_products().len();
                    select_next(&mut self.existing_state, len);
                }
                other => {
                    if self.existing_filter.handle_key(other) {
                        self.existing_state.select(Some(0));
                    }
                }
            },
            InfoFocus::ExistingList => match key {
                KeyCode::Up => {
                    let len = self.filtered_existing_products().len();
                    select_prev(&mut self.existing_state, len);
                }
                KeyCode::Down => {
                    let len = self.filtered_existing_products().len();
                    select_next(&mut self.existing_state, len);
                }
                KeyCode::Enter => self.choose_selected_existing(),
                _ => {}
            },
        }
        WizardResult::Continue
    }

    fn handle_review_key(&mut self, key: KeyEvent) -> WizardResult {
        match key.code {
            KeyCode::Esc => {
                self.exit_review_mode();
                return WizardResult::Continue;
            }
            KeyCode::Tab => {
                self.review_focus = match self.review_focus {
                    ReviewFocus::ProductName => ReviewFocus::Description,
                    ReviewFocus::Description => ReviewFocus::Rules,
                    ReviewFocus::Rules => ReviewFocus::ProductName,
                };
                return WizardResult::Continue;
            }
            _ => {}
        }

        match self.review_focus {
            ReviewFocus::ProductName => match key.code {
                KeyCode::Enter => self.advance(),
                other => {
                    self.product_name.handle_key(other);
                }
            },
            // The description editor consumes Enter as a newline
            ReviewFocus::Description => self.product_description.handle_key(key),
            ReviewFocus::Rules => match key.code {
                KeyCode::Up => {
                    select_prev(&mut self.campaign_rule_state, self.campaign_rules.len());
                }
                KeyCode::Down => {
                    select_next(&mut self.campaign_rule_state, self.campaign_rules.len());
                }
                KeyCode::Char('a') => {
                    let id = self.add_campaign_rule("New campaign rule");
                    self.open_rule_editor(RuleTarget::Campaign, id);
                }
                KeyCode::Char('e') => {
                    if let Some(id) = self.selected_rule_id(RuleTarget::Campaign) {
                        self.open_rule_editor(RuleTarget::Campaign, id);
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = self.selected_rule_id(RuleTarget::Campaign) {
                        self.remove_campaign_rule(id);
                    }
                }
                KeyCode::Enter => self.advance(),
                _ => {}
            },
        }
        WizardResult::Continue
    }

    fn handle_integrations_key(&mut self, key: KeyCode) -> WizardResult {
        match key {
            KeyCode::Esc => {
                self.retreat();
                return WizardResult::Continue;
            }
            KeyCode::Tab => {
                self.integrations_focus = match self.integrations_focus {
                    IntegrationsFocus::SheetToggle if self.sheet_enabled => {
                        IntegrationsFocus::SheetUrl
                    }
                    IntegrationsFocus::SheetToggle => IntegrationsFocus::Tracking,
                    IntegrationsFocus::SheetUrl => IntegrationsFocus::Tracking,
                    IntegrationsFocus::Tracking => IntegrationsFocus::SheetToggle,
                };
                return WizardResult::Continue;
            }
            _ => {}
        }

        match self.integrations_focus {
            IntegrationsFocus::SheetToggle => match key {
                KeyCode::Char(' ') => {
                    self.sheet_enabled = !self.sheet_enabled;
                    if !self.sheet_enabled {
                        self.integrations_focus = IntegrationsFocus::SheetToggle;
                    }
                }
                KeyCode::Enter => self.advance(),
                _ => {}
            },
            IntegrationsFocus::SheetUrl => match key {
                KeyCode::Enter => self.advance(),
                other => {
                    self.sheet_url.handle_key(other);
                }
            },
            IntegrationsFocus::Tracking => match key {
                KeyCode::Up => {
                    select_prev(&mut self.tracking_rule_state, self.tracking_rules.len());
                }
                KeyCode::Down => {
                    select_next(&mut self.tracking_rule_state, self.tracking_rules.len());
                }
                KeyCode::Char('a') => {
                    let id = self.add_tracking_rule("New tracking rule");
                    self.open_rule_editor(RuleTarget::Tracking, id);
                }
                KeyCode::Char('e') => {
                    if let Some(id) = self.selected_rule_id(RuleTarget::Tracking) {
                        self.open_rule_editor(RuleTarget::Tracking, id);
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = self.selected_rule_id(RuleTarget::Tracking) {
                        self.remove_tracking_rule(id);
                    }
                }
                KeyCode::Enter => self.advance(),
                _ => {}
            },
        }
        WizardResult::Continue
    }

    fn handle_email_setup_key(&mut self, key: KeyCode) -> WizardResult {
        match key {
            KeyCode::Esc => {
                self.retreat();
                return WizardResult::Continue;
            }
            KeyCode::Tab => {
                self.setup_focus = match self.setup_focus {
                    SetupFocus::Providers => SetupFocus::Search,
                    SetupFocus::Search => SetupFocus::Connected,
                    SetupFocus::Connected => SetupFocus::Providers,
                };
                return WizardResult::Continue;
            }
            _ => {}
        }

        match self.setup_focus {
            SetupFocus::Providers => match key {
                KeyCode::Up | KeyCode::Char('k') => {
                    select_prev(&mut self.provider_state, self.catalog.email_providers.len());
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    select_next(&mut self.provider_state, self.catalog.email_providers.len());
                }
                KeyCode::Enter | KeyCode::Char('g') => self.begin_generate_email(),
                _ => {}
            },
            SetupFocus::Search => match key {
                KeyCode::Enter => self.add_connected_email(),
                other => {
                    self.email_search.handle_key(other);
                }
            },
            SetupFocus::Connected => match key {
                KeyCode::Up => select_prev(&mut self.email_state, self.connected_emails.len()),
                KeyCode::Down => select_next(&mut self.email_state, self.connected_emails.len()),
                KeyCode::Char('d') | KeyCode::Delete => self.remove_selected_email(),
                KeyCode::Enter | KeyCode::Char('g') => self.begin_generate_email(),
                _ => {}
            },
        }
        WizardResult::Continue
    }

    fn handle_email_draft_key(&mut self, key: KeyEvent) -> WizardResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('l') {
            return WizardResult::Launch(self.launch_summary());
        }

        match key.code {
            KeyCode::Esc => self.exit_email_draft_mode(),
            KeyCode::Tab => {
                self.draft_focus = match self.draft_focus {
                    DraftFocus::Subject => DraftFocus::Body,
                    DraftFocus::Body => DraftFocus::Subject,
                };
            }
            _ => match self.draft_focus {
                DraftFocus::Subject => {
                    self.email_subject.handle_key(key.code);
                }
                DraftFocus::Body => self.email_body.handle_key(key),
            },
        }
        WizardResult::Continue
    }

    fn handle_rule_editor_key(&mut self, key: KeyCode) {
        let Some(editor) = self.rule_editor.as_mut() else {
            return;
        };
        match key {
            KeyCode::Enter => {
                if !editor.field.is_blank() {
                    let target = editor.target;
                    let id = editor.id;
                    let text = editor.field.value().trim().to_string();
                    self.edit_rule(target, id, &text);
                }
                self.rule_editor = None;
            }
            KeyCode::Esc => {
                self.rule_editor = None;
            }
            other => {
                editor.field.handle_key(other);
            }
        }
    }

    // ─── Interaction helpers ────────────────────────────────────────────────

    fn highlighted_campaign_type(&self) -> Option<CampaignType> {
        self.type_state
            .selected()
            .and_then(|i| self.catalog.campaign_types.get(i))
            .map(|opt| opt.id)
    }

    /// The chosen email provider is the highlighted radio entry
    pub(crate) fn selected_provider_index(&self) -> usize {
        self.provider_state.selected().unwrap_or(0)
    }

    fn selected_rule_id(&self, target: RuleTarget) -> Option<u32> {
        let (rules, state) = match target {
            RuleTarget::Campaign => (&self.campaign_rules, &self.campaign_rule_state),
            RuleTarget::Tracking => (&self.tracking_rules, &self.tracking_rule_state),
        };
        state.selected().and_then(|i| rules.get(i)).map(|r| r.id)
    }

    fn open_rule_editor(&mut self, target: RuleTarget, id: u32) {
        let rules = match target {
            RuleTarget::Campaign => &self.campaign_rules,
            RuleTarget::Tracking => &self.tracking_rules,
        };
        if let Some(rule) = rules.iter().find(|r| r.id == id) {
            self.rule_editor = Some(RuleEditor {
                target,
                id,
                field: TextField::with_value("Rule text", &rule.text),
            });
        }
    }

    fn add_upload(&mut self) {
        let id = self.next_upload_id;
        self.next_upload_id += 1;
        self.uploads.push(UploadedFile {
            id,
            name: format!("campaign-brief-{}.pdf", id),
            progress: 0,
            uploading: true,
        });
        self.upload_state.select(Some(self.uploads.len() - 1));
        self.simulator.begin_upload(id);
    }

    fn remove_selected_upload(&mut self) {
        if let Some(i) = self.upload_state.selected() {
            // Files still uploading cannot be removed
            if self.uploads.get(i).is_some_and(|f| !f.uploading) {
                self.uploads.remove(i);
                clamp_selection(&mut self.upload_state, self.uploads.len());
            }
        }
    }

    fn choose_selected_existing(&mut self) {
        let filtered = self.filtered_existing_products();
        let Some(product) = self
            .existing_state
            .selected()
            .and_then(|i| filtered.get(i).copied())
        else {
            return;
        };
        let name = product.name.clone();
        self.product_name.set_value(&name);
        self.product_description
            .set_text(&self.catalog.default_product_info.description);
        self.advance();
    }

    fn add_connected_email(&mut self) {
        if self.email_search.is_blank() {
            return;
        }
        let id = format!("acct-{}", self.next_email_id);
        self.next_email_id += 1;
        self.connected_emails.push(ConnectedEmail {
            id,
            address: self.email_search.value().trim().to_string(),
        });
        self.email_search.clear();
        self.email_state.select(Some(self.connected_emails.len() - 1));
    }

    fn remove_selected_email(&mut self) {
        if let Some(i) = self.email_state.selected() {
            if i < self.connected_emails.len() {
                self.connected_emails.remove(i);
                clamp_selection(&mut self.email_state, self.connected_emails.len());
            }
        }
    }

    /// Human-readable summary printed when the campaign launches
    pub(crate) fn launch_summary(&self) -> String {
        let campaign_type = match self.selected_campaign_type {
            Some(CampaignType::Other) => self.other_text.value().trim().to_string(),
            Some(kind) => self
                .catalog
                .campaign_type_option(kind)
                .map(|opt| opt.title.clone())
                .unwrap_or_default(),
            None => "Unspecified".to_string(),
        };
        let provider = self
            .catalog
            .email_providers
            .get(self.selected_provider_index())
            .map(|p| p.name.clone())
            .unwrap_or_default();

        format!(
            "Campaign launched!\n  Type:      {}\n  Product:   {}\n  Rules:     {} campaign, {} tracking\n  Sheets:    {}\n  Provider:  {}\n  Senders:   {}\n  Subject:   {}",
            campaign_type,
            self.product_name.value(),
            self.campaign_rules.len(),
            self.tracking_rules.len(),
            if self.sheet_enabled { "connected" } else { "off" },
            provider,
            self.connected_emails.len(),
            self.email_subject.value(),
        )
    }

    // ─── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        use ratatui::layout::{Constraint, Direction, Layout};

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(40)])
            .split(frame.area());

        self.render_progress_rail(frame, chunks[0]);

        match self.active_view() {
            ActiveView::ChooseType => self.render_choose_type(frame, chunks[1]),
            ActiveView::OtherText => self.render_other_text(frame, chunks[1]),
            ActiveView::CampaignInfo => self.render_campaign_info(frame, chunks[1]),
            ActiveView::Review => self.render_review(frame, chunks[1]),
            ActiveView::Integrations => self.render_integrations(frame, chunks[1]),
            ActiveView::EmailSetup => self.render_email_setup(frame, chunks[1]),
            ActiveView::EmailDraft => self.render_email_draft(frame, chunks[1]),
        }

        if self.rule_editor.is_some() {
            self.render_rule_editor(frame);
        }

        if self.scanning {
            self.render_loading_overlay(frame, "Scanning campaign info...");
        } else if self.generating {
            self.render_loading_overlay(frame, "Drafting your email...");
        }
    }
}

// ─── List selection helpers ─────────────────────────────────────────────────

pub(crate) fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = state.selected().map_or(0, |i| (i + 1) % len);
    state.select(Some(i));
}

pub(crate) fn select_prev(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = state
        .selected()
        .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
    state.select(Some(i));
}

fn clamp_selection(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
    } else if let Some(i) = state.selected() {
        state.select(Some(i.min(len - 1)));
    }
}
