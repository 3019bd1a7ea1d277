use crate::records::{ThesisLink, ThesisRecord};
use csv::{Reader, WriterBuilder};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

// Spreadsheet tools need the BOM to pick UTF-8 for the details file.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

// Column order matches the serde renames on ThesisRecord.
const RECORD_HEADERS: [&str; 11] = [
    "Link",
    "Título",
    "Autores",
    "Fecha de publicación",
    "Asesor(es)",
    "Editorial",
    "Resumen",
    "Palabras clave",
    "Identificador único",
    "Tipo de acceso",
    "Colección",
];

/// Writes the collected links as a comma-delimited CSV with a `Link` header,
/// one row per discovered URL, in discovery order.
pub fn write_links<P: AsRef<Path>>(path: P, links: &[String]) -> Result<(), Box<dyn Error>> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(["Link"])?;
    for link in links {
        writer.write_record([link])?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads the links written by the collector, preserving row order.
pub fn read_links<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut links = Vec::new();
    for row in reader.deserialize::<ThesisLink>() {
        links.push(row?.link);
    }
    Ok(links)
}

/// Writes the extracted records as a semicolon-delimited, UTF-8-with-BOM CSV.
/// The header row is written even for an empty record set.
pub fn write_records<P: AsRef<Path>>(
    path: P,
    records: &[ThesisRecord],
) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(file);
    writer.write_record(RECORD_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(link: &str) -> ThesisRecord {
        ThesisRecord {
            link: link.to_string(),
            title: "Análisis de sistemas".to_string(),
            authors: "García, Ana, Quispe, Luis".to_string(),
            publication_date: "2021".to_string(),
            advisor: "Rojas, María".to_string(),
            publisher: "Universidad Nacional Mayor de San Marcos".to_string(),
            summary: "Resumen; con punto y coma".to_string(),
            keywords: "sistemas, análisis".to_string(),
            identifier: "https://hdl.handle.net/20.500.12672/1".to_string(),
            access_type: "info:eu-repo/semantics/openAccess".to_string(),
            collection: "Facultad de Ingeniería".to_string(),
        }
    }

    #[test]
    fn links_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.csv");
        let links = vec![
            "https://cybertesis.unmsm.edu.pe/items/1".to_string(),
            "https://cybertesis.unmsm.edu.pe/items/2".to_string(),
            // Duplicates survive the round trip
            "https://cybertesis.unmsm.edu.pe/items/1".to_string(),
        ];

        write_links(&path, &links).unwrap();
        assert_eq!(read_links(&path).unwrap(), links);
    }

    #[test]
    fn empty_link_list_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.csv");
        write_links(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Link\n");
        assert!(read_links(&path).unwrap().is_empty());
    }

    #[test]
    fn records_file_has_bom_semicolons_and_fixed_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("details.csv");
        let records = vec![sample_record("https://cybertesis.unmsm.edu.pe/items/1")];

        write_records(&path, &records).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Link;Título;Autores;Fecha de publicación;Asesor(es);Editorial;Resumen;\
             Palabras clave;Identificador único;Tipo de acceso;Colección"
        );
        // The semicolon inside the summary forces quoting rather than a column split
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains("\"Resumen; con punto y coma\""));
    }

    #[test]
    fn empty_record_set_still_writes_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("details.csv");
        write_records(&path, &[]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, format!("{}\n", RECORD_HEADERS.join(";")));
    }

    #[test]
    fn writing_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");
        let records = vec![
            sample_record("https://cybertesis.unmsm.edu.pe/items/1"),
            sample_record("https://cybertesis.unmsm.edu.pe/items/2"),
        ];

        write_records(&first, &records).unwrap();
        write_records(&second, &records).unwrap();

        assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
    }
}
