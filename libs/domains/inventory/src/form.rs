//! Mutation Form Controller - exhaustive validation and submit state machine

use strum::Display;
use tracing::instrument;

use crate::collection::EquipmentCollection;
use crate::directory::CategoryDirectory;
use crate::models::{Equipment, EquipmentDraft, EquipmentId, FormDraft};
use crate::repository::{CategoryRepository, EquipmentRepository};

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    Name,
    Condition,
    Quantity,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The field is empty, unset, or references nothing loadable
    RequiredField,
    /// The value is outside its permitted range
    OutOfRange,
}

/// One failed field check, with the user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub kind: IssueKind,
    pub message: &'static str,
}

/// Check every field and report all failures at once, never stopping at the
/// first. A fully valid draft converts into the wire payload.
pub fn validate<C: CategoryRepository>(
    draft: &FormDraft,
    directory: &CategoryDirectory<C>,
) -> Result<EquipmentDraft, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if draft.name.trim().is_empty() {
        issues.push(FieldIssue {
            field: Field::Name,
            kind: IssueKind::RequiredField,
            message: "Name is required",
        });
    }
    if draft.condition.is_none() {
        issues.push(FieldIssue {
            field: Field::Condition,
            kind: IssueKind::RequiredField,
            message: "Condition is required",
        });
    }
    if draft.quantity <= 0 {
        issues.push(FieldIssue {
            field: Field::Quantity,
            kind: IssueKind::OutOfRange,
            message: "Quantity must be greater than 0",
        });
    }
    match draft.category_id {
        Some(id) if directory.contains(id) => {}
        _ => {
            issues.push(FieldIssue {
                field: Field::Category,
                kind: IssueKind::RequiredField,
                message: "Category is required",
            });
        }
    }

    match (draft.condition, draft.category_id) {
        (Some(condition), Some(category_id)) if issues.is_empty() => Ok(EquipmentDraft {
            name: draft.name.clone(),
            condition,
            quantity: draft.quantity,
            category_id,
        }),
        _ => Err(issues),
    }
}

/// Submit-side state of a form instance. Validation is synchronous, so the
/// observable states are the resting ones; a submit in flight is `Submitting`
/// and a store rejection parks the form in `Failed` until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    /// Retryable store failure; field values are preserved
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(EquipmentId),
}

/// A create or edit form for one equipment record.
///
/// Field values are never cleared on failure; the user retries from where
/// they stopped. A successful submit closes the form, and the collection has
/// already resynchronized by the time [`Self::submit`] returns true.
pub struct EquipmentForm {
    target: FormTarget,
    draft: FormDraft,
    state: FormState,
    issues: Vec<FieldIssue>,
}

impl EquipmentForm {
    /// Blank create form
    pub fn create() -> Self {
        Self {
            target: FormTarget::Create,
            draft: FormDraft::default(),
            state: FormState::Idle,
            issues: Vec::new(),
        }
    }

    /// Edit form prefilled from an existing record
    pub fn edit(equipment: &Equipment) -> Self {
        Self {
            target: FormTarget::Edit(equipment.id),
            draft: FormDraft::from_equipment(equipment),
            state: FormState::Idle,
            issues: Vec::new(),
        }
    }

    pub fn target(&self) -> FormTarget {
        self.target
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Mutable access for field edits while the form is open
    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Field issues from the last submit attempt
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Validate, and when every field passes, submit through the collection.
    ///
    /// Returns true when the mutation succeeded and the form should close.
    /// Validation failures populate [`Self::issues`] and never reach the
    /// store; store failures park the form in [`FormState::Failed`].
    #[instrument(skip_all, fields(form_target = ?self.target))]
    pub async fn submit<R, C>(
        &mut self,
        collection: &mut EquipmentCollection<R>,
        directory: &CategoryDirectory<C>,
    ) -> bool
    where
        R: EquipmentRepository,
        C: CategoryRepository,
    {
        self.issues.clear();

        let payload = match validate(&self.draft, directory) {
            Ok(payload) => payload,
            Err(issues) => {
                self.issues = issues;
                self.state = FormState::Idle;
                return false;
            }
        };

        self.state = FormState::Submitting;
        let result = match self.target {
            FormTarget::Create => collection.create(payload).await.map(|_| ()),
            FormTarget::Edit(id) => collection.update(id, payload).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.state = FormState::Idle;
                true
            }
            Err(err) => {
                self.state = FormState::Failed(err.to_string());
                false
            }
        }
    }

    /// Dismiss a failure banner and return to `Idle` for a retry
    pub fn acknowledge_failure(&mut self) {
        if matches!(self.state, FormState::Failed(_)) {
            self.state = FormState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::models::{Category, Condition};
    use crate::repository::{MockCategoryRepository, MockEquipmentRepository};
    use std::sync::Arc;

    async fn directory_with_hardware() -> CategoryDirectory<MockCategoryRepository> {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list().returning(|| {
            Ok(vec![Category {
                id: 1,
                name: "Hardware".to_string(),
            }])
        });
        let mut directory = CategoryDirectory::new(Arc::new(mock_repo));
        directory.reload().await.unwrap();
        directory
    }

    fn valid_draft() -> FormDraft {
        FormDraft {
            name: "Drill".to_string(),
            condition: Some(Condition::New),
            quantity: 5,
            category_id: Some(1),
        }
    }

    #[tokio::test]
    async fn test_blank_name_is_the_only_failing_field() {
        let directory = directory_with_hardware().await;
        let draft = FormDraft {
            name: String::new(),
            ..valid_draft()
        };

        let issues = validate(&draft, &directory).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, Field::Name);
        assert_eq!(issues[0].kind, IssueKind::RequiredField);
    }

    #[tokio::test]
    async fn test_zero_quantity_fails_range_check() {
        let directory = directory_with_hardware().await;
        let draft = FormDraft {
            quantity: 0,
            ..valid_draft()
        };

        let issues = validate(&draft, &directory).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, Field::Quantity);
        assert_eq!(issues[0].kind, IssueKind::OutOfRange);
    }

    #[tokio::test]
    async fn test_every_invalid_field_is_reported_at_once() {
        let directory = directory_with_hardware().await;
        let draft = FormDraft {
            name: "   ".to_string(),
            condition: None,
            quantity: -2,
            category_id: None,
        };

        let issues = validate(&draft, &directory).unwrap_err();
        let fields: Vec<Field> = issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Condition, Field::Quantity, Field::Category]
        );
    }

    #[tokio::test]
    async fn test_category_outside_directory_is_rejected() {
        let directory = directory_with_hardware().await;
        let draft = FormDraft {
            category_id: Some(42),
            ..valid_draft()
        };

        let issues = validate(&draft, &directory).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, Field::Category);
    }

    #[tokio::test]
    async fn test_valid_draft_converts_to_wire_payload() {
        let directory = directory_with_hardware().await;
        let payload = validate(&valid_draft(), &directory).unwrap();
        assert_eq!(payload.name, "Drill");
        assert_eq!(payload.condition, Condition::New);
        assert_eq!(payload.quantity, 5);
        assert_eq!(payload.category_id, 1);
    }

    #[tokio::test]
    async fn test_validation_failure_blocks_submission() {
        let directory = directory_with_hardware().await;
        let mut mock_repo = MockEquipmentRepository::new();
        mock_repo.expect_create().never();
        let mut collection = EquipmentCollection::new(Arc::new(mock_repo));

        let mut form = EquipmentForm::create();
        form.draft_mut().quantity = 0;
        form.draft_mut().name = "Drill".to_string();
        form.draft_mut().condition = Some(Condition::New);
        form.draft_mut().category_id = Some(1);

        let closed = form.submit(&mut collection, &directory).await;

        assert!(!closed);
        assert_eq!(form.state(), &FormState::Idle);
        assert_eq!(form.issues().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_preserves_field_values() {
        let directory = directory_with_hardware().await;
        let mut mock_repo = MockEquipmentRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(InventoryError::Network("store unreachable".to_string())));
        let mut collection = EquipmentCollection::new(Arc::new(mock_repo));

        let mut form = EquipmentForm::create();
        *form.draft_mut() = valid_draft();

        let closed = form.submit(&mut collection, &directory).await;

        assert!(!closed);
        assert!(matches!(form.state(), FormState::Failed(_)));
        // The user never retypes after a failure
        assert_eq!(form.draft(), &valid_draft());

        form.acknowledge_failure();
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[tokio::test]
    async fn test_successful_submit_closes_the_form() {
        let directory = directory_with_hardware().await;
        let mut mock_repo = MockEquipmentRepository::new();
        mock_repo.expect_create().returning(|draft| {
            Ok(Equipment {
                id: 11,
                name: draft.name,
                condition: draft.condition,
                quantity: draft.quantity,
                category_id: draft.category_id,
            })
        });
        mock_repo.expect_list().returning(|| Ok(vec![]));
        let mut collection = EquipmentCollection::new(Arc::new(mock_repo));

        let mut form = EquipmentForm::create();
        *form.draft_mut() = valid_draft();

        let closed = form.submit(&mut collection, &directory).await;
        assert!(closed);
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[tokio::test]
    async fn test_edit_form_prefills_and_targets_the_record() {
        let row = Equipment {
            id: 4,
            name: "Sander".to_string(),
            condition: Condition::Used,
            quantity: 2,
            category_id: 1,
        };
        let form = EquipmentForm::edit(&row);
        assert_eq!(form.target(), FormTarget::Edit(4));
        assert_eq!(form.draft().name, "Sander");
    }
}
