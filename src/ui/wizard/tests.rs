use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::catalog::{CampaignType, Catalog};
use crate::config::SimulateConfig;
use crate::tasks::{Simulator, TaskOutcome};

fn zero_delay() -> SimulateConfig {
    SimulateConfig {
        scan_ms: 0,
        generate_ms: 0,
        upload_step_ms: 0,
        upload_steps: 5,
    }
}

/// Wizard whose simulated operations go nowhere (receiver dropped)
fn make_wizard() -> WizardScreen {
    let catalog = Catalog::builtin().unwrap();
    let (simulator, _rx) = Simulator::new(&zero_delay());
    WizardScreen::new(catalog, simulator)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// ─── Step bounds ────────────────────────────────────────────────────────────

#[test]
fn test_step_stays_in_bounds() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);

    for _ in 0..10 {
        wizard.advance();
        assert!((1..=4).contains(&wizard.current_step()));
    }
    assert_eq!(wizard.current_step(), 4);

    for _ in 0..10 {
        wizard.retreat();
        assert!((1..=4).contains(&wizard.current_step()));
    }
    assert_eq!(wizard.current_step(), 1);
}

#[test]
fn test_advance_at_last_step_is_noop() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Paid);
    for _ in 0..3 {
        wizard.advance();
    }
    assert_eq!(wizard.current_step(), 4);
    wizard.advance();
    assert_eq!(wizard.current_step(), 4);
}

#[test]
fn test_retreat_at_first_step_is_noop() {
    let mut wizard = make_wizard();
    wizard.retreat();
    assert_eq!(wizard.current_step(), 1);
}

#[test]
fn test_advance_blocked_without_selection() {
    let mut wizard = make_wizard();
    assert!(!wizard.can_proceed());
    wizard.advance();
    assert_eq!(wizard.current_step(), 1);
}

// ─── canProceed gate ────────────────────────────────────────────────────────

#[test]
fn test_can_proceed_step_one_cases() {
    let mut wizard = make_wizard();
    assert!(!wizard.can_proceed());

    wizard.select_campaign_type(CampaignType::Other);
    assert!(!wizard.can_proceed());

    wizard.other_text.set_value("   ");
    assert!(!wizard.can_proceed());

    wizard.other_text.set_value("promo");
    assert!(wizard.can_proceed());

    wizard.select_campaign_type(CampaignType::Seeding);
    assert!(wizard.can_proceed());
}

#[test]
fn test_can_proceed_later_steps_always_pass() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    for step in 2..=4 {
        wizard.advance();
        assert_eq!(wizard.current_step(), step);
        assert!(wizard.can_proceed());
    }
}

#[test]
fn test_clear_campaign_type_only_from_other() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.clear_campaign_type();
    assert_eq!(wizard.selected_campaign_type(), Some(CampaignType::Seeding));

    wizard.select_campaign_type(CampaignType::Other);
    wizard.clear_campaign_type();
    assert_eq!(wizard.selected_campaign_type(), None);
}

// ─── Active sub-step derivation ─────────────────────────────────────────────

fn active_ids(wizard: &WizardScreen) -> Vec<u8> {
    wizard
        .sub_steps()
        .iter()
        .filter(|s| s.active)
        .map(|s| s.id)
        .collect()
}

#[test]
fn test_exactly_one_active_through_the_flow() {
    let mut wizard = make_wizard();
    assert_eq!(active_ids(&wizard), vec![1]);

    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();
    assert_eq!(active_ids(&wizard), vec![2]);

    // Review sub-mode of step 2 owns rail position 3
    wizard.finish_scan();
    assert_eq!(active_ids(&wizard), vec![3]);

    wizard.advance();
    assert_eq!(active_ids(&wizard), vec![4]);

    wizard.advance();
    assert_eq!(active_ids(&wizard), vec![5]);
}

#[test]
fn test_draft_mode_highlights_nothing() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    for _ in 0..3 {
        wizard.advance();
    }
    wizard.finish_generate_email();
    assert!(wizard.email_draft_mode());
    assert!(active_ids(&wizard).is_empty());
    assert_eq!(wizard.active_sub_step(), None);
}

#[test]
fn test_completion_compares_rail_id_to_step_counter() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.current_step(), 3);

    let completed: Vec<u8> = wizard
        .sub_steps()
        .iter()
        .filter(|s| s.completed)
        .map(|s| s.id)
        .collect();
    assert_eq!(completed, vec![1, 2]);

    wizard.advance();
    let completed: Vec<u8> = wizard
        .sub_steps()
        .iter()
        .filter(|s| s.completed)
        .map(|s| s.id)
        .collect();
    // Rail position 5 never reads completed; the counter tops out at 4
    assert_eq!(completed, vec![1, 2, 3]);
}

#[test]
fn test_sub_mode_flags_survive_retreat() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();
    wizard.finish_scan();
    assert!(wizard.review_mode());

    wizard.retreat();
    assert_eq!(wizard.current_step(), 1);
    assert!(wizard.review_mode());

    // Returning to step 2 lands back on the review view
    wizard.advance();
    assert_eq!(wizard.active_view(), ActiveView::Review);
}

// ─── Simulated operations ───────────────────────────────────────────────────

#[tokio::test]
async fn test_scan_completion_enters_review() {
    let catalog = Catalog::builtin().unwrap();
    let (simulator, mut rx) = Simulator::new(&zero_delay());
    let mut wizard = WizardScreen::new(catalog, simulator);

    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();
    wizard.begin_scan();
    assert!(wizard.scanning());
    assert!(!wizard.review_mode());

    let outcome = rx.recv().await.unwrap();
    wizard.apply_outcome(outcome);

    assert!(!wizard.scanning());
    assert!(wizard.review_mode());
    assert_eq!(wizard.current_step(), 2);
    assert!(!wizard.product_name.is_blank());
    assert!(!wizard.campaign_rules.is_empty());

    wizard.advance();
    assert_eq!(wizard.current_step(), 3);
}

#[tokio::test]
async fn test_scan_is_single_flight() {
    let catalog = Catalog::builtin().unwrap();
    let (simulator, mut rx) = Simulator::new(&zero_delay());
    let mut wizard = WizardScreen::new(catalog, simulator);

    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();
    wizard.begin_scan();
    wizard.begin_scan();

    assert_eq!(rx.recv().await, Some(TaskOutcome::ScanComplete));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_begin_scan_requires_upload_view() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.begin_scan();
    assert!(!wizard.scanning());

    wizard.advance();
    wizard.finish_scan();
    // Already reviewing; a second scan must not start
    wizard.begin_scan();
    assert!(!wizard.scanning());
}

#[tokio::test]
async fn test_generate_requires_connected_email() {
    let catalog = Catalog::builtin().unwrap();
    let (simulator, mut rx) = Simulator::new(&zero_delay());
    let mut wizard = WizardScreen::new(catalog, simulator);

    wizard.select_campaign_type(CampaignType::Seeding);
    for _ in 0..3 {
        wizard.advance();
    }
    wizard.connected_emails.clear();
    wizard.begin_generate_email();
    assert!(!wizard.generating());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_generate_completion_enters_draft() {
    let catalog = Catalog::builtin().unwrap();
    let (simulator, mut rx) = Simulator::new(&zero_delay());
    let mut wizard = WizardScreen::new(catalog, simulator);

    wizard.select_campaign_type(CampaignType::Seeding);
    for _ in 0..3 {
        wizard.advance();
    }
    wizard.begin_generate_email();
    assert!(wizard.generating());

    let outcome = rx.recv().await.unwrap();
    wizard.apply_outcome(outcome);

    assert!(!wizard.generating());
    assert!(wizard.email_draft_mode());
    assert!(!wizard.email_subject.is_blank());
    assert!(!wizard.email_body.is_blank());
}

#[test]
fn test_stale_outcomes_are_ignored() {
    let mut wizard = make_wizard();
    wizard.apply_outcome(TaskOutcome::ScanComplete);
    assert!(!wizard.review_mode());
    wizard.apply_outcome(TaskOutcome::EmailDraftComplete);
    assert!(!wizard.email_draft_mode());
}

#[test]
fn test_upload_outcomes_update_files() {
    let mut wizard = make_wizard();
    wizard.uploads.push(UploadedFile {
        id: 1,
        name: "brief.pdf".to_string(),
        progress: 0,
        uploading: true,
    });

    wizard.apply_outcome(TaskOutcome::UploadProgress {
        file_id: 1,
        progress: 40,
    });
    assert_eq!(wizard.uploads[0].progress, 40);
    assert!(wizard.uploads[0].uploading);

    wizard.apply_outcome(TaskOutcome::UploadComplete { file_id: 1 });
    assert_eq!(wizard.uploads[0].progress, 100);
    assert!(!wizard.uploads[0].uploading);
}

// ─── Rule lists ─────────────────────────────────────────────────────────────

#[test]
fn test_rule_id_assignment() {
    assert_eq!(next_rule_id(&[]), 1);
    let rules = vec![
        Rule {
            id: 1,
            text: "a".to_string(),
        },
        Rule {
            id: 3,
            text: "b".to_string(),
        },
    ];
    assert_eq!(next_rule_id(&rules), 4);
}

#[test]
fn test_campaign_rule_crud() {
    let mut wizard = make_wizard();
    assert_eq!(wizard.add_campaign_rule("first"), 1);
    assert_eq!(wizard.add_campaign_rule("second"), 2);

    wizard.remove_campaign_rule(1);
    assert_eq!(wizard.campaign_rules.len(), 1);

    // Max of remaining ids plus one, not the list length
    assert_eq!(wizard.add_campaign_rule("third"), 3);

    wizard.edit_rule(RuleTarget::Campaign, 3, "edited");
    assert_eq!(
        wizard.campaign_rules.iter().find(|r| r.id == 3).unwrap().text,
        "edited"
    );
}

#[test]
fn test_tracking_rules_seeded_from_catalog() {
    let mut wizard = make_wizard();
    let seeded = wizard.tracking_rules.len();
    assert!(seeded > 0);

    let id = wizard.add_tracking_rule("flag late posts");
    assert_eq!(id, seeded as u32 + 1);
    wizard.remove_tracking_rule(id);
    assert_eq!(wizard.tracking_rules.len(), seeded);
}

// ─── Flows driven through keys ──────────────────────────────────────────────

#[test]
fn test_other_type_scenario() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Other);
    assert!(!wizard.can_proceed());

    for c in "promo".chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
    assert!(wizard.can_proceed());

    assert_eq!(wizard.handle_key(key(KeyCode::Enter)), WizardResult::Continue);
    assert_eq!(wizard.current_step(), 2);
}

#[test]
fn test_space_selects_highlighted_type() {
    let mut wizard = make_wizard();
    wizard.handle_key(key(KeyCode::Down));
    wizard.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(wizard.selected_campaign_type(), Some(CampaignType::Paid));
}

#[test]
fn test_escape_backs_out_of_other_text() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Other);
    assert_eq!(wizard.active_view(), ActiveView::OtherText);

    wizard.handle_key(key(KeyCode::Esc));
    assert_eq!(wizard.selected_campaign_type(), None);
    assert_eq!(wizard.active_view(), ActiveView::ChooseType);
}

#[test]
fn test_escape_at_first_step_cancels() {
    let mut wizard = make_wizard();
    assert_eq!(wizard.handle_key(key(KeyCode::Esc)), WizardResult::Cancel);
}

#[test]
fn test_scan_key_gated_on_uploads() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();

    // No completed upload yet, Enter must not start a scan
    wizard.handle_key(key(KeyCode::Enter));
    assert!(!wizard.scanning());
}

#[test]
fn test_keys_ignored_while_scanning() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();
    wizard.uploads.push(UploadedFile {
        id: 1,
        name: "brief.pdf".to_string(),
        progress: 100,
        uploading: false,
    });

    // Flip the flag directly to avoid spawning a task
    wizard.scanning = true;
    wizard.handle_key(key(KeyCode::Esc));
    assert_eq!(wizard.current_step(), 2);

    assert_eq!(wizard.handle_key(ctrl('c')), WizardResult::Cancel);
}

#[test]
fn test_existing_product_selection_advances() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();

    wizard.handle_key(key(KeyCode::Tab));
    wizard.handle_key(key(KeyCode::Tab));
    assert_eq!(wizard.info_focus, InfoFocus::ExistingFilter);

    for c in "trail".chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(wizard.filtered_existing_products().len(), 1);

    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.current_step(), 3);
    assert_eq!(wizard.product_name.value(), "Trailblazer Water Bottle");
}

#[test]
fn test_launch_from_draft_view() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    for _ in 0..3 {
        wizard.advance();
    }
    wizard.finish_generate_email();

    let result = wizard.handle_key(ctrl('l'));
    match result {
        WizardResult::Launch(summary) => {
            assert!(summary.contains("Campaign launched"));
            assert!(summary.contains("Product Seeding"));
        }
        other => panic!("expected launch, got {:?}", other),
    }
}

#[test]
fn test_connected_email_add_and_remove() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    for _ in 0..3 {
        wizard.advance();
    }
    let seeded = wizard.connected_emails.len();

    wizard.handle_key(key(KeyCode::Tab)); // Providers -> Search
    for c in "new@cheerful.so".chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.connected_emails.len(), seeded + 1);
    assert_eq!(
        wizard.connected_emails.last().unwrap().address,
        "new@cheerful.so"
    );

    wizard.handle_key(key(KeyCode::Tab)); // Search -> Connected
    wizard.handle_key(key(KeyCode::Char('d')));
    assert_eq!(wizard.connected_emails.len(), seeded);
}

#[test]
fn test_rule_editor_commits_on_enter() {
    let mut wizard = make_wizard();
    wizard.select_campaign_type(CampaignType::Seeding);
    wizard.advance();
    wizard.advance(); // step 3, tracking rules

    wizard.integrations_focus = IntegrationsFocus::Tracking;
    wizard.handle_key(key(KeyCode::Char('a')));
    assert!(wizard.rule_editor.is_some());

    // Replace the placeholder text
    for _ in 0.."New tracking rule".len() {
        wizard.handle_key(key(KeyCode::Backspace));
    }
    for c in "post weekly".chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
    wizard.handle_key(key(KeyCode::Enter));

    assert!(wizard.rule_editor.is_none());
    assert_eq!(wizard.tracking_rules.last().unwrap().text, "post weekly");
}
