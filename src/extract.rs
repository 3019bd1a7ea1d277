use crate::dom::{DomPage, Sel};

/// Whether a field lookup expects one element or a list of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Multiple,
}

/// The outcome of one field extraction. Lookup failures are already folded
/// into the cardinality-appropriate empty value by the time a caller holds
/// one of these; a record assembly step never has to handle an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// The empty value for a cardinality.
    pub fn empty(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::Single => FieldValue::Single(String::new()),
            Cardinality::Multiple => FieldValue::Multiple(Vec::new()),
        }
    }

    /// Collapse to a single string, joining multiple values with `sep`.
    pub fn joined(self, sep: &str) -> String {
        match self {
            FieldValue::Single(value) => value,
            FieldValue::Multiple(values) => values.join(sep),
        }
    }
}

/// Best-effort field extraction against an already-loaded page.
///
/// Reads the text (or `attr`) of the element(s) matching `sel`. Any lookup
/// failure (element not found, stale reference, lost session) is logged and
/// converted to the empty value for the requested cardinality, so a single
/// missing optional field never aborts extraction of the rest of a record.
/// Single cardinality takes the first match in document order.
pub async fn field<D: DomPage>(
    page: &D,
    sel: Sel<'_>,
    cardinality: Cardinality,
    attr: Option<&str>,
) -> FieldValue {
    match page.query_values(sel, attr).await {
        Ok(values) => match cardinality {
            Cardinality::Single => {
                FieldValue::Single(values.into_iter().next().unwrap_or_default())
            }
            Cardinality::Multiple => FieldValue::Multiple(values),
        },
        Err(e) => {
            ::log::debug!("lookup failed for {:?}: {}", sel, e);
            FieldValue::empty(cardinality)
        }
    }
}

/// Text of the first element matching `sel`, or `""`.
pub async fn one<D: DomPage>(page: &D, sel: Sel<'_>) -> String {
    match field(page, sel, Cardinality::Single, None).await {
        FieldValue::Single(value) => value,
        FieldValue::Multiple(_) => unreachable!(),
    }
}

/// `attr` of the first element matching `sel`, or `""`.
pub async fn one_attr<D: DomPage>(page: &D, sel: Sel<'_>, attr: &str) -> String {
    match field(page, sel, Cardinality::Single, Some(attr)).await {
        FieldValue::Single(value) => value,
        FieldValue::Multiple(_) => unreachable!(),
    }
}

/// Texts of all elements matching `sel`, in document order.
pub async fn many<D: DomPage>(page: &D, sel: Sel<'_>) -> Vec<String> {
    match field(page, sel, Cardinality::Multiple, None).await {
        FieldValue::Multiple(values) => values,
        FieldValue::Single(_) => unreachable!(),
    }
}
