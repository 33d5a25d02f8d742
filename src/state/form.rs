//! Product form state.
//!
//! A [`ProductForm`] holds one editing session. Its [`FormMode`] is chosen when
//! the form opens and decides both the initial values and what a successful
//! submit produces. Field values are kept as the strings the user typed; they
//! only become numbers once every rule in [`FIELD_RULES`] passes.

use crate::inventory::{Product, ProductDraft, MAX_DESCRIPTION_LENGTH};
use crate::utils::text_processing::truncate_chars;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tui_textarea::{CursorMove, TextArea};

/// Specifying the form mode.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormMode {
    Add,
    Edit,
    Copy,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Nuevo Producto",
            FormMode::Edit => "Editar Producto",
            FormMode::Copy => "Copiar Producto",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Add => "Guardar Producto",
            FormMode::Edit => "Actualizar Producto",
            FormMode::Copy => "Crear Copia",
        }
    }
}

/// Specifying form fields, in focus order.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum FormField {
    Code,
    Name,
    Description,
    Quantity,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Code,
        FormField::Name,
        FormField::Description,
        FormField::Quantity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Code => "Código del Producto (solo números)",
            FormField::Name => "Nombre del Producto",
            FormField::Description => "Descripción",
            FormField::Quantity => "Cantidad en Stock",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Code => FormField::Name,
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Quantity,
            FormField::Quantity => FormField::Code,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Code => FormField::Quantity,
            FormField::Name => FormField::Code,
            FormField::Description => FormField::Name,
            FormField::Quantity => FormField::Description,
        }
    }
}

/// Validation failure attached to a single field.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum FieldError {
    #[error("{field:?} is required")]
    MissingField { field: FormField },
    #[error("{field:?} must be numeric")]
    NonNumericField { field: FormField },
    #[error("{field:?} must not be negative")]
    NegativeQuantity { field: FormField },
}

impl FieldError {
    /// Message shown under the offending field.
    ///
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::MissingField { field } => match field {
                FormField::Code => "El código es obligatorio",
                FormField::Name => "El nombre es obligatorio",
                FormField::Description => "La descripción es obligatoria",
                FormField::Quantity => "La cantidad es obligatoria",
            },
            FieldError::NonNumericField {
                field: FormField::Code,
            } => "El código debe contener solo números",
            FieldError::NonNumericField { .. } | FieldError::NegativeQuantity { .. } => {
                "La cantidad debe ser un número positivo"
            }
        }
    }
}

/// Errors returned by a rejected submit.
///
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Form has {} invalid field(s)", .errors.len())]
    Invalid {
        errors: BTreeMap<FormField, FieldError>,
    },
}

/// Declarative validation rule for one field.
///
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: FormField,
    pub required: bool,
    pub numeric: bool,
    pub min: Option<i64>,
}

/// Rules evaluated on submit, one per field.
pub const FIELD_RULES: [FieldRule; 4] = [
    FieldRule {
        field: FormField::Code,
        required: true,
        numeric: true,
        min: None,
    },
    FieldRule {
        field: FormField::Name,
        required: true,
        numeric: false,
        min: None,
    },
    FieldRule {
        field: FormField::Description,
        required: true,
        numeric: false,
        min: None,
    },
    FieldRule {
        field: FormField::Quantity,
        required: true,
        numeric: true,
        min: Some(0),
    },
];

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?[0-9]+$").expect("numeric pattern is valid"))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

impl FieldRule {
    /// Check `value` against this rule.
    ///
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let field = self.field;
        if self.required && value.trim().is_empty() {
            return Err(FieldError::MissingField { field });
        }
        if self.numeric {
            if !numeric_pattern().is_match(value) {
                return Err(FieldError::NonNumericField { field });
            }
            if let Some(min) = self.min {
                match value.parse::<i64>() {
                    Ok(number) if number < min => {
                        return Err(FieldError::NegativeQuantity { field })
                    }
                    Ok(_) => {}
                    Err(_) => return Err(FieldError::NonNumericField { field }),
                }
            } else if !is_digits(value) {
                return Err(FieldError::NonNumericField { field });
            }
        }
        Ok(())
    }
}

/// Outcome of a successful submit.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Add and copy modes create a new product
    Create(ProductDraft),
    /// Edit mode replaces the seed product, keeping its id and creation time
    Update(Product),
}

/// Presentational level of the description counter.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Critical,
}

/// Build a text area holding `text`, with the cursor after the last character.
///
fn text_area(text: &str) -> TextArea<'static> {
    let mut area = TextArea::from(text.split('\n').map(str::to_string));
    area.move_cursor(CursorMove::Bottom);
    area.move_cursor(CursorMove::End);
    area
}

/// Houses one product editing session.
///
/// The description is edited in a multi-line [`TextArea`]; `description`
/// mirrors its lines joined with `\n` and is what rules and counters see.
///
#[derive(Debug, Clone)]
pub struct ProductForm {
    mode: FormMode,
    seed: Option<Product>,
    code: String,
    name: String,
    description: String,
    description_area: TextArea<'static>,
    quantity: String,
    errors: BTreeMap<FormField, FieldError>,
    focus: FormField,
}

impl ProductForm {
    /// Open a form in `mode`. Edit and copy modes prefill from `seed`; without
    /// a seed every mode starts blank.
    ///
    pub fn new(mode: FormMode, seed: Option<&Product>) -> Self {
        let mut form = ProductForm {
            mode,
            seed: seed.cloned(),
            code: String::new(),
            name: String::new(),
            description: String::new(),
            description_area: TextArea::default(),
            quantity: String::new(),
            errors: BTreeMap::new(),
            focus: FormField::Code,
        };
        if let (FormMode::Edit | FormMode::Copy, Some(product)) = (mode, seed) {
            form.code = product.code.to_string();
            form.name = match mode {
                FormMode::Copy => product.copy_name(),
                _ => product.name.clone(),
            };
            form.description = product.description.clone();
            form.description_area = text_area(&product.description);
            form.quantity = product.quantity.to_string();
        }
        form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn seed(&self) -> Option<&Product> {
        self.seed.as_ref()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Code => &self.code,
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Quantity => &self.quantity,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Code => &mut self.code,
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Quantity => &mut self.quantity,
        }
    }

    /// Editor backing the description field.
    ///
    pub fn description_area(&self) -> &TextArea<'static> {
        &self.description_area
    }

    pub fn errors(&self) -> &BTreeMap<FormField, FieldError> {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Apply a field change. The code field refuses values that are not all
    /// digits (empty is allowed until submit); the description is cut at
    /// [`MAX_DESCRIPTION_LENGTH`] characters. Returns false when the change was
    /// refused.
    ///
    pub fn set_field(&mut self, field: FormField, value: &str) -> bool {
        let value = match field {
            FormField::Code if !value.is_empty() && !is_digits(value) => return false,
            FormField::Description => truncate_chars(value, MAX_DESCRIPTION_LENGTH),
            _ => value.to_string(),
        };
        if field == FormField::Description {
            self.description_area = text_area(&value);
        }
        *self.value_mut(field) = value;
        self.errors.remove(&field);
        true
    }

    /// Apply `edit` to the description editor. The edit is undone when it
    /// would push the description past [`MAX_DESCRIPTION_LENGTH`] characters.
    ///
    fn edit_description<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut TextArea<'static>) -> bool,
    {
        let previous = self.description_area.clone();
        if !edit(&mut self.description_area) {
            return false;
        }
        let text = self.description_area.lines().join("\n");
        if text.chars().count() > MAX_DESCRIPTION_LENGTH {
            self.description_area = previous;
            return false;
        }
        if text != self.description {
            self.description = text;
            self.errors.remove(&FormField::Description);
        }
        true
    }

    /// Type a character into the focused field. The description inserts at
    /// its cursor; the other fields append.
    ///
    pub fn insert_char(&mut self, c: char) -> bool {
        let field = self.focus;
        if field == FormField::Description {
            return self.edit_description(|area| {
                area.insert_char(c);
                true
            });
        }
        let mut value = self.value(field).to_string();
        value.push(c);
        self.set_field(field, &value)
    }

    /// Start a new description line at the cursor. Other fields are single
    /// line and refuse it.
    ///
    pub fn insert_newline(&mut self) -> bool {
        if self.focus != FormField::Description {
            return false;
        }
        self.edit_description(|area| {
            area.insert_newline();
            true
        })
    }

    /// Delete the character before the cursor in the description, or the last
    /// character of any other focused field.
    ///
    pub fn backspace(&mut self) -> bool {
        let field = self.focus;
        if field == FormField::Description {
            return self.edit_description(|area| area.delete_char());
        }
        let mut value = self.value(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.set_field(field, &value)
    }

    /// Delete the character under the description cursor.
    ///
    pub fn delete_forward(&mut self) -> bool {
        if self.focus != FormField::Description {
            return false;
        }
        self.edit_description(|area| area.delete_next_char())
    }

    /// Move the description cursor. Returns false when the description is not
    /// focused.
    ///
    pub fn move_cursor(&mut self, movement: CursorMove) -> bool {
        if self.focus != FormField::Description {
            return false;
        }
        self.description_area.move_cursor(movement);
        true
    }

    /// Cursor position in the description as (row, column).
    ///
    pub fn description_cursor(&self) -> (usize, usize) {
        self.description_area.cursor()
    }

    /// Number of characters in the description.
    ///
    pub fn char_count(&self) -> usize {
        self.description.chars().count()
    }

    /// Description length relative to the maximum, from 0.0 to 1.0.
    ///
    pub fn char_progress(&self) -> f64 {
        self.char_count() as f64 / MAX_DESCRIPTION_LENGTH as f64
    }

    pub fn char_level(&self) -> CounterLevel {
        let tenths = self.char_count() * 10;
        if tenths > MAX_DESCRIPTION_LENGTH * 9 {
            CounterLevel::Critical
        } else if tenths > MAX_DESCRIPTION_LENGTH * 7 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    /// Run every rule and return the failures without touching the form.
    ///
    pub fn validate(&self) -> BTreeMap<FormField, FieldError> {
        FIELD_RULES
            .iter()
            .filter_map(|rule| {
                rule.check(self.value(rule.field))
                    .err()
                    .map(|error| (rule.field, error))
            })
            .collect()
    }

    /// Validate and, if every field passes, turn the draft into a
    /// [`Submission`] and clear it. On failure the errors are stored on the
    /// form and nothing else changes.
    ///
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            if let Some(first) = errors.keys().next() {
                self.focus = *first;
            }
            return Err(FormError::Invalid { errors });
        }
        self.errors.clear();

        let code = self.code.parse::<u64>().map_err(|_| self.reject(FormField::Code))?;
        // Same reading as the rule: signed, so "-0" and "+4" are accepted
        let quantity = match self.quantity.parse::<i64>().map(u32::try_from) {
            Ok(Ok(quantity)) => quantity,
            _ => return Err(self.reject(FormField::Quantity)),
        };
        let draft = ProductDraft {
            code,
            name: self.name.clone(),
            description: self.description.clone(),
            quantity,
        };

        let submission = match (self.mode, &self.seed) {
            (FormMode::Edit, Some(seed)) => {
                Submission::Update(Product::from_draft(seed.id, seed.created_at.clone(), draft))
            }
            _ => Submission::Create(draft),
        };
        self.clear();
        Ok(submission)
    }

    fn reject(&mut self, field: FormField) -> FormError {
        let error = FieldError::NonNumericField { field };
        self.errors.insert(field, error);
        self.focus = field;
        FormError::Invalid {
            errors: self.errors.clone(),
        }
    }

    /// Reset every field to blank.
    ///
    pub fn clear(&mut self) {
        self.code.clear();
        self.name.clear();
        self.description.clear();
        self.description_area = TextArea::default();
        self.quantity.clear();
        self.errors.clear();
        self.focus = FormField::Code;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ProductId;

    fn laptop() -> Product {
        Product {
            id: ProductId(99),
            code: 12345,
            name: "Laptop HP".to_string(),
            description: "Portatil de 15 pulgadas".to_string(),
            quantity: 8,
            created_at: "2024-03-05T12:00:00.000Z".to_string(),
        }
    }

    fn filled(mode: FormMode) -> ProductForm {
        let mut form = ProductForm::new(mode, None);
        form.set_field(FormField::Code, "555");
        form.set_field(FormField::Name, "Monitor");
        form.set_field(FormField::Description, "24 pulgadas");
        form.set_field(FormField::Quantity, "3");
        form
    }

    #[test]
    fn test_add_mode_starts_blank() {
        let form = ProductForm::new(FormMode::Add, Some(&laptop()));
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.focus(), FormField::Code);
    }

    #[test]
    fn test_edit_mode_prefills_verbatim() {
        let form = ProductForm::new(FormMode::Edit, Some(&laptop()));
        assert_eq!(form.value(FormField::Code), "12345");
        assert_eq!(form.value(FormField::Name), "Laptop HP");
        assert_eq!(form.value(FormField::Description), "Portatil de 15 pulgadas");
        assert_eq!(form.value(FormField::Quantity), "8");
    }

    #[test]
    fn test_copy_mode_appends_suffix() {
        let form = ProductForm::new(FormMode::Copy, Some(&laptop()));
        assert_eq!(form.value(FormField::Name), "Laptop HP (Copia)");
        assert_eq!(form.value(FormField::Code), "12345");
    }

    #[test]
    fn test_edit_without_seed_starts_blank() {
        let form = ProductForm::new(FormMode::Edit, None);
        assert_eq!(form.value(FormField::Name), "");
    }

    #[test]
    fn test_code_rejects_non_numeric_input() {
        let mut form = ProductForm::new(FormMode::Add, None);
        assert!(form.insert_char('1'));
        assert!(!form.insert_char('a'));
        assert!(!form.insert_char('-'));
        assert!(form.insert_char('2'));
        assert_eq!(form.value(FormField::Code), "12");
        assert!(form.set_field(FormField::Code, ""));
        assert_eq!(form.value(FormField::Code), "");
    }

    #[test]
    fn test_description_is_truncated() {
        let mut form = ProductForm::new(FormMode::Add, None);
        let long = "x".repeat(400);
        assert!(form.set_field(FormField::Description, &long));
        assert_eq!(form.char_count(), MAX_DESCRIPTION_LENGTH);
        assert_eq!(form.char_progress(), 1.0);

        form.set_focus(FormField::Description);
        form.insert_char('y');
        assert_eq!(form.char_count(), MAX_DESCRIPTION_LENGTH);
        assert!(!form.value(FormField::Description).contains('y'));
    }

    #[test]
    fn test_description_spans_lines() {
        let mut form = ProductForm::new(FormMode::Add, None);
        form.set_focus(FormField::Description);
        for c in "linea uno".chars() {
            assert!(form.insert_char(c));
        }
        assert!(form.insert_newline());
        for c in "linea dos".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.value(FormField::Description), "linea uno\nlinea dos");
        assert_eq!(form.description_area().lines().len(), 2);
        assert_eq!(form.char_count(), 19);
        assert_eq!(form.description_cursor(), (1, 9));
    }

    #[test]
    fn test_description_edits_at_cursor() {
        let mut form = ProductForm::new(FormMode::Add, None);
        form.set_field(FormField::Description, "mesa roja");
        form.set_focus(FormField::Description);
        assert_eq!(form.description_cursor(), (0, 9));

        assert!(form.move_cursor(CursorMove::Head));
        assert!(form.delete_forward());
        form.insert_char('M');
        assert_eq!(form.value(FormField::Description), "Mesa roja");

        form.move_cursor(CursorMove::End);
        assert!(form.backspace());
        assert_eq!(form.value(FormField::Description), "Mesa roj");
    }

    #[test]
    fn test_newline_only_in_description() {
        let mut form = ProductForm::new(FormMode::Add, None);
        form.set_focus(FormField::Name);
        assert!(!form.insert_newline());
        assert!(!form.move_cursor(CursorMove::Head));
        assert!(!form.delete_forward());
        assert_eq!(form.value(FormField::Name), "");
    }

    #[test]
    fn test_newline_counts_towards_limit() {
        let mut form = ProductForm::new(FormMode::Add, None);
        form.set_field(FormField::Description, &"x".repeat(MAX_DESCRIPTION_LENGTH));
        form.set_focus(FormField::Description);
        assert!(!form.insert_newline());
        assert_eq!(form.description_area().lines().len(), 1);
        assert_eq!(form.char_count(), MAX_DESCRIPTION_LENGTH);
    }

    #[test]
    fn test_edit_prefills_multiline_description() {
        let mut product = laptop();
        product.description = "Primera\nSegunda".to_string();
        let form = ProductForm::new(FormMode::Edit, Some(&product));
        assert_eq!(form.description_area().lines(), ["Primera", "Segunda"]);
        assert_eq!(form.value(FormField::Description), "Primera\nSegunda");
    }

    #[test]
    fn test_negative_zero_quantity_submits_as_zero() {
        let mut form = filled(FormMode::Add);
        form.set_field(FormField::Quantity, "-0");
        assert!(form.validate().is_empty());
        match form.submit().unwrap() {
            Submission::Create(draft) => assert_eq!(draft.quantity, 0),
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_quantity_beyond_range_is_rejected() {
        let mut form = filled(FormMode::Add);
        form.set_field(FormField::Quantity, "4294967296");
        assert!(form.submit().is_err());
        assert!(form.error(FormField::Quantity).is_some());
    }

    #[test]
    fn test_char_level_thresholds() {
        let mut form = ProductForm::new(FormMode::Add, None);
        form.set_field(FormField::Description, &"x".repeat(245));
        assert_eq!(form.char_level(), CounterLevel::Normal);
        form.set_field(FormField::Description, &"x".repeat(246));
        assert_eq!(form.char_level(), CounterLevel::Warning);
        form.set_field(FormField::Description, &"x".repeat(316));
        assert_eq!(form.char_level(), CounterLevel::Critical);
    }

    #[test]
    fn test_other_fields_accept_verbatim() {
        let mut form = ProductForm::new(FormMode::Add, None);
        assert!(form.set_field(FormField::Name, "  Silla  "));
        assert!(form.set_field(FormField::Quantity, "abc"));
        assert_eq!(form.value(FormField::Name), "  Silla  ");
        assert_eq!(form.value(FormField::Quantity), "abc");
    }

    #[test]
    fn test_backspace_and_focus() {
        let mut form = ProductForm::new(FormMode::Add, None);
        assert!(!form.backspace());
        form.focus_next();
        assert_eq!(form.focus(), FormField::Name);
        form.insert_char('a');
        form.insert_char('b');
        assert!(form.backspace());
        assert_eq!(form.value(FormField::Name), "a");
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focus(), FormField::Quantity);
    }

    #[test]
    fn test_validation_reports_code_and_quantity() {
        let mut form = ProductForm::new(FormMode::Add, None);
        form.set_field(FormField::Code, "");
        form.set_field(FormField::Name, "X");
        form.set_field(FormField::Description, "Y");
        form.set_field(FormField::Quantity, "-1");

        let result = form.submit();
        let errors = match result {
            Err(FormError::Invalid { errors }) => errors,
            other => panic!("expected invalid form, got {:?}", other),
        };
        let fields: Vec<_> = errors.keys().copied().collect();
        assert_eq!(fields, vec![FormField::Code, FormField::Quantity]);
        assert_eq!(
            errors[&FormField::Code],
            FieldError::MissingField {
                field: FormField::Code
            }
        );
        assert_eq!(
            errors[&FormField::Quantity],
            FieldError::NegativeQuantity {
                field: FormField::Quantity
            }
        );
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.value(FormField::Name), "X");
        assert_eq!(form.focus(), FormField::Code);
    }

    #[test]
    fn test_validation_messages() {
        let mut form = ProductForm::new(FormMode::Add, None);
        form.set_field(FormField::Name, "   ");
        form.set_field(FormField::Quantity, "dos");
        let errors = form.validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&FormField::Code].message(), "El código es obligatorio");
        assert_eq!(errors[&FormField::Name].message(), "El nombre es obligatorio");
        assert_eq!(
            errors[&FormField::Description].message(),
            "La descripción es obligatoria"
        );
        assert_eq!(
            errors[&FormField::Quantity].message(),
            "La cantidad debe ser un número positivo"
        );
    }

    #[test]
    fn test_rules_cover_every_field_once() {
        let fields: Vec<_> = FIELD_RULES.iter().map(|rule| rule.field).collect();
        assert_eq!(fields, FormField::ALL.to_vec());
    }

    #[test]
    fn test_quantity_rule_accepts_zero() {
        let rule = FIELD_RULES[3];
        assert!(rule.check("0").is_ok());
        assert!(rule.check("+4").is_ok());
        assert_eq!(
            rule.check("1.5"),
            Err(FieldError::NonNumericField {
                field: FormField::Quantity
            })
        );
    }

    #[test]
    fn test_changing_field_clears_its_error() {
        let mut form = ProductForm::new(FormMode::Add, None);
        assert!(form.submit().is_err());
        assert!(form.error(FormField::Name).is_some());
        form.set_field(FormField::Name, "Mesa");
        assert!(form.error(FormField::Name).is_none());
        assert!(form.error(FormField::Code).is_some());
    }

    #[test]
    fn test_add_submit_creates_and_clears() {
        let mut form = filled(FormMode::Add);
        let submission = form.submit().unwrap();
        assert_eq!(
            submission,
            Submission::Create(ProductDraft {
                code: 555,
                name: "Monitor".to_string(),
                description: "24 pulgadas".to_string(),
                quantity: 3,
            })
        );
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_copy_submit_creates() {
        let mut form = ProductForm::new(FormMode::Copy, Some(&laptop()));
        match form.submit().unwrap() {
            Submission::Create(draft) => assert_eq!(draft.name, "Laptop HP (Copia)"),
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_submit_preserves_identity() {
        let original = laptop();
        let mut form = ProductForm::new(FormMode::Edit, Some(&original));
        form.set_field(FormField::Quantity, "20");
        match form.submit().unwrap() {
            Submission::Update(product) => {
                assert_eq!(product.id, original.id);
                assert_eq!(product.created_at, original.created_at);
                assert_eq!(product.quantity, 20);
                assert_eq!(product.name, original.name);
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_code_is_rejected() {
        let mut form = filled(FormMode::Add);
        form.set_field(FormField::Code, "99999999999999999999999");
        let result = form.submit();
        assert!(result.is_err());
        assert!(form.error(FormField::Code).is_some());
        assert_eq!(form.value(FormField::Name), "Monitor");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(FormMode::Add.title(), "Nuevo Producto");
        assert_eq!(FormMode::Edit.submit_label(), "Actualizar Producto");
        assert_eq!(FormMode::Copy.submit_label(), "Crear Copia");
    }

    #[test]
    fn test_form_error_display() {
        let mut form = ProductForm::new(FormMode::Add, None);
        let error = form.submit().unwrap_err();
        assert!(error.to_string().contains("4 invalid"));
    }
}
