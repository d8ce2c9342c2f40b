//! Add-Todo Validation and Submission
//!
//! Client-side gating of the creation form and handling of the create result.

use crate::api::TodoSource;
use crate::error::AddFailure;
use crate::models::NewTodo;
use crate::route::AppRoute;

const OWNER_MIN: usize = 2;
const OWNER_MAX: usize = 50;
const CATEGORY_MIN: usize = 2;
const CATEGORY_MAX: usize = 50;
const BODY_MAX: usize = 300;

/// Fields of the add-todo form as the user entered them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTodoForm {
    pub owner: String,
    pub category: String,
    /// `None` until the user picks complete or incomplete
    pub status: Option<bool>,
    /// `None` when the body was never filled in
    pub body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Owner,
    Category,
    Status,
    Body,
}

/// First failing rule per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub owner: Option<&'static str>,
    pub category: Option<&'static str>,
    pub status: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.category.is_none() && self.status.is_none() && self.body.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Owner => self.owner,
            Field::Category => self.category,
            Field::Status => self.status,
            Field::Body => self.body,
        }
    }
}

fn check_text(
    value: &str,
    min: usize,
    max: usize,
    messages: [&'static str; 3],
) -> Option<&'static str> {
    let len = value.chars().count();
    if len == 0 {
        Some(messages[0])
    } else if len < min {
        Some(messages[1])
    } else if len > max {
        Some(messages[2])
    } else {
        None
    }
}

impl AddTodoForm {
    pub fn validate(&self) -> FieldErrors {
        let owner = check_text(
            &self.owner,
            OWNER_MIN,
            OWNER_MAX,
            [
                "Owner is required",
                "Owner must be at least 2 characters long",
                "Owner must be at most 50 characters long",
            ],
        );
        let category = check_text(
            &self.category,
            CATEGORY_MIN,
            CATEGORY_MAX,
            [
                "Category is required",
                "Category must be at least 2 characters long",
                "Category must be at most 50 characters long",
            ],
        );
        let status = self.status.is_none().then_some("Status is required");
        let body = match self.body.as_deref() {
            None | Some("") => Some("Body is required"),
            Some(b) if b.chars().count() > BODY_MAX => Some("Body must be at most 300 characters long"),
            Some(_) => None,
        };
        FieldErrors { owner, category, status, body }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The draft to send, or the validation errors that block it
    pub fn to_draft(&self) -> Result<NewTodo, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewTodo {
            owner: self.owner.clone(),
            status: self.status.unwrap_or_default(),
            body: self.body.clone().unwrap_or_default(),
            category: self.category.clone(),
        })
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),
    /// The server accepted the todo
    Added { id: String, notice: String, route: AppRoute },
    /// The server or network refused; the form keeps its values
    Failed { failure: AddFailure, notice: String },
}

/// Validate and, if valid, send one create request
pub async fn submit_todo<S: TodoSource>(source: &S, form: &AddTodoForm) -> SubmitOutcome {
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(errors) => {
            log::debug!("[AddTodo] Submit blocked by validation: {:?}", errors);
            return SubmitOutcome::Invalid(errors);
        }
    };
    match source.add_todo(&draft).await {
        Ok(id) => SubmitOutcome::Added {
            notice: format!("Added todo {}", draft.owner),
            route: AppRoute::Detail(id.clone()),
            id,
        },
        Err(err) => {
            log::error!("[AddTodo] Create failed: {}", err);
            let failure = AddFailure::classify(&err);
            SubmitOutcome::Failed { notice: failure.message(&err), failure }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTodoSource;
    use crate::error::ApiError;

    fn valid_form() -> AddTodoForm {
        AddTodoForm {
            owner: "Chris Smith".into(),
            category: "Homework".into(),
            status: Some(false),
            body: Some("This is a test todo".into()),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().is_valid());
        let draft = valid_form().to_draft().unwrap();
        assert_eq!(draft.owner, "Chris Smith");
        assert!(!draft.status);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = AddTodoForm::default().validate();
        assert_eq!(errors.get(Field::Owner), Some("Owner is required"));
        assert_eq!(errors.get(Field::Category), Some("Category is required"));
        assert_eq!(errors.get(Field::Status), Some("Status is required"));
        assert_eq!(errors.get(Field::Body), Some("Body is required"));
    }

    #[test]
    fn test_owner_length() {
        let form = AddTodoForm { owner: "C".into(), ..valid_form() };
        assert_eq!(form.validate().owner, Some("Owner must be at least 2 characters long"));

        let form = AddTodoForm { owner: "x".repeat(51), ..valid_form() };
        assert_eq!(form.validate().owner, Some("Owner must be at most 50 characters long"));

        let form = AddTodoForm { owner: "x".repeat(50), ..valid_form() };
        assert!(form.is_valid());
    }

    #[test]
    fn test_category_length() {
        let form = AddTodoForm { category: "H".into(), ..valid_form() };
        assert_eq!(form.validate().category, Some("Category must be at least 2 characters long"));

        let form = AddTodoForm { category: "h".repeat(51), ..valid_form() };
        assert_eq!(form.validate().category, Some("Category must be at most 50 characters long"));
    }

    #[test]
    fn test_body_length_counts_characters() {
        let form = AddTodoForm { body: Some("é".repeat(300)), ..valid_form() };
        assert!(form.is_valid());

        let form = AddTodoForm { body: Some("a".repeat(301)), ..valid_form() };
        assert_eq!(form.validate().body, Some("Body must be at most 300 characters long"));
    }

    #[test]
    fn test_status_false_is_a_value() {
        let form = AddTodoForm { status: Some(false), ..valid_form() };
        assert_eq!(form.validate().status, None);

        let form = AddTodoForm { status: None, ..valid_form() };
        assert_eq!(form.validate().status, Some("Status is required"));
    }

    #[tokio::test]
    async fn test_submit_success_navigates_to_detail() {
        let source = MockTodoSource::new();
        let outcome = submit_todo(&source, &valid_form()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Added {
                id: "1".into(),
                notice: "Added todo Chris Smith".into(),
                route: AppRoute::Detail("1".into()),
            }
        );
        if let SubmitOutcome::Added { route, .. } = outcome {
            assert_eq!(route.path(), "/todos/1");
        }
        let added = source.added.borrow();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].category, "Homework");
        assert_eq!(added[0].body, "This is a test todo");
    }

    #[tokio::test]
    async fn test_submit_without_body_never_calls_server() {
        let source = MockTodoSource::new();
        let form = AddTodoForm { body: None, ..valid_form() };

        let outcome = submit_todo(&source, &form).await;

        match outcome {
            SubmitOutcome::Invalid(errors) => assert_eq!(errors.body, Some("Body is required")),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert!(source.added.borrow().is_empty());
        assert_eq!(form.owner, "Chris Smith");
        assert_eq!(form.category, "Homework");
        assert_eq!(form.body, None);
    }

    #[tokio::test]
    async fn test_submit_failures_are_classified() {
        let cases = [
            (400, AddFailure::BadRequest, "Tried to add an illegal new todo"),
            (500, AddFailure::ServerFailure, "The server failed to process your request"),
            (404, AddFailure::Unexpected, "An unexpected error occurred"),
        ];
        for (status, expected, prefix) in cases {
            let source = MockTodoSource::failing(ApiError::Status { status, message: "nope".into() });
            match submit_todo(&source, &valid_form()).await {
                SubmitOutcome::Failed { failure, notice } => {
                    assert_eq!(failure, expected);
                    assert!(notice.starts_with(prefix), "{}", notice);
                }
                other => panic!("expected failure, got {:?}", other),
            }
        }
    }
}
