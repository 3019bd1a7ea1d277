use serde::{Deserialize, Serialize};

/// One row of the link-collector output: a single detail-page URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThesisLink {
    #[serde(rename = "Link")]
    pub link: String,
}

/// Metadata extracted from one thesis detail page.
///
/// Field order matches the column order of the output file. Multi-valued
/// fields (authors, keywords) are flattened to one comma-joined string.
/// No field is guaranteed non-empty except `link`, which always carries the
/// source URL verbatim so a row stays traceable to its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisRecord {
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Título")]
    pub title: String,
    #[serde(rename = "Autores")]
    pub authors: String,
    #[serde(rename = "Fecha de publicación")]
    pub publication_date: String,
    #[serde(rename = "Asesor(es)")]
    pub advisor: String,
    #[serde(rename = "Editorial")]
    pub publisher: String,
    #[serde(rename = "Resumen")]
    pub summary: String,
    #[serde(rename = "Palabras clave")]
    pub keywords: String,
    #[serde(rename = "Identificador único")]
    pub identifier: String,
    #[serde(rename = "Tipo de acceso")]
    pub access_type: String,
    #[serde(rename = "Colección")]
    pub collection: String,
}
