use async_trait::async_trait;
use std::collections::HashSet;

use signup_wizard::form::{FieldName, FormModel, FormValues, Framework, NewsletterForm};
use signup_wizard::wizard::{
    newsletter_steps, Direction, Ignored, StepDefinition, StepWizard, SubmissionHandler,
    Transition,
};

/// Handler that records every submission it receives
#[derive(Default)]
struct Recorder {
    calls: Vec<FormValues>,
}

impl SubmissionHandler for Recorder {
    fn submit(&mut self, values: &FormValues) {
        self.calls.push(values.clone());
    }
}

/// Form whose validity is scripted per field
#[derive(Default)]
struct ScriptedForm {
    invalid: HashSet<FieldName>,
    validated: Vec<Vec<FieldName>>,
}

#[async_trait]
impl FormModel for ScriptedForm {
    async fn validate(&mut self, fields: &[FieldName]) -> bool {
        tokio::task::yield_now().await;
        self.validated.push(fields.to_vec());
        fields.iter().all(|f| !self.invalid.contains(f))
    }

    fn values(&self) -> FormValues {
        FormValues::default()
    }

    fn error(&self, field: FieldName) -> Option<&str> {
        self.invalid.contains(&field).then_some("invalid")
    }
}

fn scripted() -> StepWizard<ScriptedForm, Recorder> {
    StepWizard::new(newsletter_steps(), ScriptedForm::default(), Recorder::default()).unwrap()
}

async fn advance_to(wizard: &mut StepWizard<ScriptedForm, Recorder>, step: usize) {
    while wizard.state().current_step < step {
        assert!(matches!(wizard.next().await, Transition::Advanced { .. }));
    }
}

#[tokio::test]
async fn next_with_valid_fields_advances_from_every_step() {
    for i in 0..=1 {
        let mut wizard = scripted();
        advance_to(&mut wizard, i).await;

        assert_eq!(wizard.next().await, Transition::Advanced { from: i, to: i + 1 });
        let state = wizard.state();
        assert_eq!(state.current_step, i + 1);
        assert_eq!(state.previous_step, i);
        assert_eq!(state.delta(), 1);
    }
}

#[tokio::test]
async fn next_with_an_invalid_field_stays_put() {
    let steps = newsletter_steps();
    for (i, step) in steps.iter().enumerate().take(2) {
        for field in &step.fields {
            let mut wizard = scripted();
            advance_to(&mut wizard, i).await;
            let before = wizard.state();

            wizard.form_mut().invalid.insert(*field);
            assert_eq!(wizard.next().await, Transition::Rejected);
            assert_eq!(wizard.state(), before);
        }
    }
}

#[tokio::test]
async fn next_validates_only_the_current_step() {
    let mut wizard = scripted();
    wizard.form_mut().invalid.insert(FieldName::Email);
    wizard.next().await;
    assert_eq!(
        wizard.form().validated,
        vec![vec![FieldName::FirstName, FieldName::LastName]]
    );
    assert_eq!(wizard.state().current_step, 1);
}

#[tokio::test]
async fn prev_ignores_validity() {
    for i in 1..=2 {
        let mut wizard = scripted();
        advance_to(&mut wizard, i).await;
        wizard.form_mut().invalid.extend(FieldName::ALL);
        let checks = wizard.form().validated.len();

        assert_eq!(wizard.prev(), Transition::Retreated { from: i, to: i - 1 });
        assert_eq!(wizard.state().current_step, i - 1);
        assert_eq!(wizard.state().previous_step, i);
        assert_eq!(wizard.state().direction(), Direction::Backward);
        assert_eq!(wizard.form().validated.len(), checks);
    }
}

#[tokio::test]
async fn boundaries_are_noops() {
    let mut wizard = scripted();
    assert_eq!(wizard.prev(), Transition::Ignored(Ignored::AtFirstStep));

    advance_to(&mut wizard, 2).await;
    let before = wizard.state();
    assert_eq!(wizard.next().await, Transition::Ignored(Ignored::AtLastStep));
    assert_eq!(wizard.state(), before);
}

#[tokio::test]
async fn submit_validates_every_field_and_calls_handler_once() {
    let mut wizard = scripted();
    advance_to(&mut wizard, 2).await;

    assert_eq!(wizard.submit().await, Transition::Submitted);
    assert!(wizard.state().is_submitted);
    assert_eq!(wizard.handler().calls.len(), 1);
    assert_eq!(
        wizard.form().validated.last().unwrap(),
        &FieldName::ALL.to_vec()
    );

    assert_eq!(wizard.submit().await, Transition::Ignored(Ignored::AlreadySubmitted));
    assert_eq!(wizard.handler().calls.len(), 1);
}

#[tokio::test]
async fn submit_with_invalid_final_field_does_not_submit() {
    let mut wizard = scripted();
    advance_to(&mut wizard, 2).await;
    wizard.form_mut().invalid.insert(FieldName::Email);

    assert_eq!(wizard.submit().await, Transition::Rejected);
    assert!(!wizard.state().is_submitted);
    assert!(wizard.handler().calls.is_empty());
}

#[tokio::test]
async fn submit_catches_fields_broken_on_earlier_steps() {
    let mut wizard = scripted();
    advance_to(&mut wizard, 2).await;
    wizard.form_mut().invalid.insert(FieldName::FirstName);

    assert_eq!(wizard.submit().await, Transition::Rejected);
    assert!(wizard.handler().calls.is_empty());
    assert_eq!(wizard.state().current_step, 2);
}

#[tokio::test]
async fn nothing_is_submitted_on_the_way_to_the_last_step() {
    let mut wizard = scripted();
    advance_to(&mut wizard, 2).await;
    assert!(wizard.handler().calls.is_empty());
}

#[tokio::test]
async fn works_with_a_custom_step_layout() {
    let steps = vec![
        StepDefinition::new([FieldName::Email]),
        StepDefinition::new([FieldName::FirstName]),
        StepDefinition::new([FieldName::Framework]),
        StepDefinition::new([FieldName::LastName]),
    ];
    let mut wizard = StepWizard::new(steps, ScriptedForm::default(), Recorder::default()).unwrap();
    for _ in 0..3 {
        wizard.next().await;
    }
    assert!(wizard.state().is_last_step());
    assert_eq!(wizard.current_fields(), &[FieldName::LastName]);
    assert_eq!(wizard.submit().await, Transition::Submitted);
}

#[tokio::test]
async fn newsletter_scenario() {
    let mut wizard =
        StepWizard::new(newsletter_steps(), NewsletterForm::default(), Recorder::default())
            .unwrap();

    // Empty first name blocks step 0
    assert_eq!(wizard.next().await, Transition::Rejected);
    assert_eq!(wizard.state().current_step, 0);

    wizard.form_mut().set_text(FieldName::FirstName, "Ada");
    assert_eq!(wizard.next().await, Transition::Advanced { from: 0, to: 1 });
    assert_eq!(wizard.state().previous_step, 0);
    assert_eq!(wizard.state().delta(), 1);

    // No framework yet
    assert_eq!(wizard.next().await, Transition::Rejected);
    assert_eq!(wizard.state().current_step, 1);
    assert_eq!(wizard.form().error(FieldName::Framework), Some("Required"));

    wizard.form_mut().set_framework(Framework::React);
    assert_eq!(wizard.next().await, Transition::Advanced { from: 1, to: 2 });

    assert_eq!(wizard.prev(), Transition::Retreated { from: 2, to: 1 });
    assert_eq!(wizard.state().previous_step, 2);
    assert_eq!(wizard.state().delta(), -1);

    assert_eq!(wizard.next().await, Transition::Advanced { from: 1, to: 2 });

    wizard.form_mut().set_text(FieldName::Email, "a@b.com");
    assert_eq!(wizard.submit().await, Transition::Submitted);
    assert!(wizard.state().is_submitted);

    let calls = &wizard.handler().calls;
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        FormValues {
            first_name: "Ada".to_string(),
            last_name: String::new(),
            framework: Some(Framework::React),
            email: "a@b.com".to_string(),
        }
    );
}
