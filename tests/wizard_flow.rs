//! End-to-end wizard flow driven through the public state machine API

use cheerful::catalog::{CampaignType, Catalog};
use cheerful::config::SimulateConfig;
use cheerful::tasks::Simulator;
use cheerful::ui::wizard::WizardScreen;

fn zero_delay() -> SimulateConfig {
    SimulateConfig {
        scan_ms: 0,
        generate_ms: 0,
        upload_step_ms: 0,
        upload_steps: 5,
    }
}

#[tokio::test]
async fn full_campaign_flow() {
    let catalog = Catalog::builtin().unwrap();
    let (simulator, mut rx) = Simulator::new(&zero_delay());
    let mut wizard = WizardScreen::new(catalog, simulator);

    // Step 1: pick a type
    assert_eq!(wizard.current_step(), 1);
    assert!(!wizard.can_proceed());
    wizard.select_campaign_type(CampaignType::Seeding);
    assert!(wizard.can_proceed());
    wizard.advance();

    // Step 2: scan, review, continue
    assert_eq!(wizard.current_step(), 2);
    wizard.begin_scan();
    assert!(wizard.scanning());
    let outcome = rx.recv().await.unwrap();
    wizard.apply_outcome(outcome);
    assert!(wizard.review_mode());
    assert_eq!(wizard.current_step(), 2);
    wizard.advance();

    // Step 3: integrations place no gate on progression
    assert_eq!(wizard.current_step(), 3);
    wizard.advance();

    // Step 4: generate the draft
    assert_eq!(wizard.current_step(), 4);
    wizard.begin_generate_email();
    assert!(wizard.generating());
    let outcome = rx.recv().await.unwrap();
    wizard.apply_outcome(outcome);
    assert!(wizard.email_draft_mode());

    // The rail highlighted exactly one position at every non-draft stop;
    // drafting highlights none
    assert!(wizard.active_sub_step().is_none());
}

#[tokio::test]
async fn retreat_and_return_remembers_sub_modes() {
    let catalog = Catalog::builtin().unwrap();
    let (simulator, mut rx) = Simulator::new(&zero_delay());
    let mut wizard = WizardScreen::new(catalog, simulator);

    wizard.select_campaign_type(CampaignType::Paid);
    wizard.advance();
    wizard.begin_scan();
    let outcome = rx.recv().await.unwrap();
    wizard.apply_outcome(outcome);
    assert!(wizard.review_mode());

    wizard.retreat();
    assert_eq!(wizard.current_step(), 1);
    assert!(wizard.review_mode());

    wizard.advance();
    assert_eq!(wizard.current_step(), 2);
    assert!(wizard.review_mode());
}
