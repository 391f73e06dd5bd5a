//! Multi-Step Wizard
//!
//! Linear step navigation with per-step validation, shared by the vendor
//! onboarding and checker registration flows.

use std::marker::PhantomData;

/// A step in a fixed, ordered flow
pub trait WizardStep: Copy + Eq + Send + Sync + 'static {
    /// All steps in display order
    const ALL: &'static [Self];

    fn title(&self) -> &'static str;
}

/// Form data that can be checked one step at a time
pub trait StepForm<S: WizardStep> {
    fn validate_step(&self, step: S) -> Vec<FieldError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Result of a successful `next()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance<S> {
    Moved(S),
    /// The last step validated; the form can be submitted
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard<S> {
    index: usize,
    /// Furthest step reached; earlier steps may be revisited freely
    furthest: usize,
    _step: PhantomData<S>,
}

impl<S: WizardStep> Default for Wizard<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WizardStep> Wizard<S> {
    pub fn new() -> Self {
        Self {
            index: 0,
            furthest: 0,
            _step: PhantomData,
        }
    }

    pub fn current(&self) -> S {
        S::ALL[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == S::ALL.len()
    }

    /// Validate the current step and move forward when it passes
    pub fn next<F: StepForm<S>>(&mut self, form: &F) -> Result<Advance<S>, Vec<FieldError>> {
        let errors = form.validate_step(self.current());
        if !errors.is_empty() {
            return Err(errors);
        }
        if self.is_last() {
            return Ok(Advance::Complete);
        }
        self.index += 1;
        self.furthest = self.furthest.max(self.index);
        Ok(Advance::Moved(self.current()))
    }

    /// Step back; a no-op on the first step
    pub fn back(&mut self) -> S {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jump to a step already reached. Returns false for steps not yet unlocked.
    pub fn go_to(&mut self, step: S) -> bool {
        match S::ALL.iter().position(|s| *s == step) {
            Some(i) if i <= self.furthest => {
                self.index = i;
                true
            }
            _ => false,
        }
    }

    pub fn status(&self, step: S) -> StepStatus {
        let i = S::ALL.iter().position(|s| *s == step).unwrap_or(usize::MAX);
        if i == self.index {
            StepStatus::Current
        } else if i < self.index || i <= self.furthest {
            StepStatus::Done
        } else {
            StepStatus::Upcoming
        }
    }

    /// (1-based current step, total steps)
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, S::ALL.len())
    }

    pub fn progress_percent(&self) -> u32 {
        let (current, total) = self.progress();
        (current * 100 / total) as u32
    }
}

// ========================
// Field Validators
// ========================

pub fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    }
}

/// Loose `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

pub fn is_digits(value: &str, min: usize, max: usize) -> bool {
    let value = value.trim();
    (min..=max).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        One,
        Two,
        Three,
    }

    impl WizardStep for Step {
        const ALL: &'static [Self] = &[Step::One, Step::Two, Step::Three];

        fn title(&self) -> &'static str {
            match self {
                Step::One => "One",
                Step::Two => "Two",
                Step::Three => "Three",
            }
        }
    }

    struct Form {
        name: String,
    }

    impl StepForm<Step> for Form {
        fn validate_step(&self, step: Step) -> Vec<FieldError> {
            let mut errors = Vec::new();
            if step == Step::One {
                require(&mut errors, "name", &self.name, "Name");
            }
            errors
        }
    }

    #[test]
    fn test_next_blocks_on_invalid_step() {
        let mut wizard = Wizard::<Step>::new();
        let form = Form { name: " ".into() };
        let errors = wizard.next(&form).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "Name is required")]);
        assert_eq!(wizard.current(), Step::One);
    }

    #[test]
    fn test_walk_to_completion() {
        let mut wizard = Wizard::<Step>::new();
        let form = Form { name: "Acme".into() };
        assert_eq!(wizard.next(&form), Ok(Advance::Moved(Step::Two)));
        assert_eq!(wizard.next(&form), Ok(Advance::Moved(Step::Three)));
        assert!(wizard.is_last());
        assert_eq!(wizard.next(&form), Ok(Advance::Complete));
        assert_eq!(wizard.progress(), (3, 3));
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn test_back_and_go_to() {
        let mut wizard = Wizard::<Step>::new();
        let form = Form { name: "Acme".into() };
        assert_eq!(wizard.back(), Step::One);
        assert!(!wizard.go_to(Step::Three));

        wizard.next(&form).unwrap();
        wizard.next(&form).unwrap();
        assert_eq!(wizard.back(), Step::Two);
        assert_eq!(wizard.status(Step::Three), StepStatus::Done);
        assert!(wizard.go_to(Step::Three));
        assert!(wizard.go_to(Step::One));
        assert_eq!(wizard.status(Step::One), StepStatus::Current);
        assert!(wizard.is_first());
    }

    #[test]
    fn test_status_of_fresh_wizard() {
        let wizard = Wizard::<Step>::new();
        assert_eq!(wizard.status(Step::One), StepStatus::Current);
        assert_eq!(wizard.status(Step::Two), StepStatus::Upcoming);
    }

    #[test]
    fn test_validators() {
        assert!(is_valid_email("seller@shop.in"));
        assert!(!is_valid_email("seller@shop"));
        assert!(!is_valid_email("@shop.in"));
        assert!(!is_valid_email("a b@shop.in"));
        assert!(is_digits("9876543210", 10, 10));
        assert!(!is_digits("98765-4321", 10, 10));
    }
}
