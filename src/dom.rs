use fantoccini::{Client, Locator};

/// Error raised by a DOM lookup or navigation step. Implementations surface
/// whatever their backend reports; the safe extractor folds it into an empty
/// value and callers of the extractor never see it.
pub type DomError = Box<dyn std::error::Error + Send + Sync>;

/// A DOM selector in one of the two dialects the target pages are addressed
/// with: plain CSS, or an XPath query (used for the label-sibling lookups on
/// detail pages, which CSS cannot express).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sel<'a> {
    Css(&'a str),
    XPath(&'a str),
}

impl<'a> Sel<'a> {
    /// The fantoccini locator for this selector.
    pub fn locator(&self) -> Locator<'a> {
        match *self {
            Sel::Css(expr) => Locator::Css(expr),
            Sel::XPath(expr) => Locator::XPath(expr),
        }
    }

    /// The raw selector expression, dialect aside.
    pub fn expression(&self) -> &'a str {
        match *self {
            Sel::Css(expr) | Sel::XPath(expr) => expr,
        }
    }
}

/// Read-only view of the page currently loaded in a browser session.
///
/// The one operation the safe extractor needs: all values matching a
/// selector, in document order. Text content when `attr` is `None`,
/// otherwise the named attribute (empty string when the attribute is unset
/// on a matching element).
#[allow(async_fn_in_trait)]
pub trait DomPage {
    async fn query_values(&self, sel: Sel<'_>, attr: Option<&str>)
    -> Result<Vec<String>, DomError>;
}

/// `DomPage` over a live WebDriver session.
pub struct LiveDom<'a> {
    client: &'a Client,
}

impl<'a> LiveDom<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

impl DomPage for LiveDom<'_> {
    async fn query_values(
        &self,
        sel: Sel<'_>,
        attr: Option<&str>,
    ) -> Result<Vec<String>, DomError> {
        let elements = self.client.find_all(sel.locator()).await?;
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            let value = match attr {
                Some(name) => element.attr(name).await?.unwrap_or_default(),
                None => element.text().await?,
            };
            values.push(value);
        }
        Ok(values)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// In-memory `DomPage` keyed by selector expression, for testing the
    /// extraction contract without a WebDriver server.
    #[derive(Default)]
    pub struct FakeDom {
        values: HashMap<(String, Option<String>), Vec<String>>,
        failing: HashSet<String>,
    }

    impl FakeDom {
        pub fn new() -> Self {
            Self::default()
        }

        /// Elements matching `sel` with the given text values.
        pub fn text(mut self, sel: Sel<'_>, values: &[&str]) -> Self {
            self.values.insert(
                (sel.expression().to_string(), None),
                values.iter().map(|v| v.to_string()).collect(),
            );
            self
        }

        /// Elements matching `sel` with the given values for `attr`.
        pub fn attr(mut self, sel: Sel<'_>, attr: &str, values: &[&str]) -> Self {
            self.values.insert(
                (sel.expression().to_string(), Some(attr.to_string())),
                values.iter().map(|v| v.to_string()).collect(),
            );
            self
        }

        /// Any lookup through `sel` fails, regardless of attribute.
        pub fn failing(mut self, sel: Sel<'_>) -> Self {
            self.failing.insert(sel.expression().to_string());
            self
        }
    }

    // Lets a borrowed fake serve as the page type of a fake browser session.
    impl DomPage for &FakeDom {
        async fn query_values(
            &self,
            sel: Sel<'_>,
            attr: Option<&str>,
        ) -> Result<Vec<String>, DomError> {
            (**self).query_values(sel, attr).await
        }
    }

    impl DomPage for FakeDom {
        async fn query_values(
            &self,
            sel: Sel<'_>,
            attr: Option<&str>,
        ) -> Result<Vec<String>, DomError> {
            if self.failing.contains(sel.expression()) {
                return Err(format!("lookup failed: {}", sel.expression()).into());
            }
            let key = (sel.expression().to_string(), attr.map(|a| a.to_string()));
            Ok(self.values.get(&key).cloned().unwrap_or_default())
        }
    }
}
