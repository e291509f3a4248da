//! POM rendering for catalog publications, and a reader for the fields it writes.

use std::collections::BTreeMap;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use bomkit_core::config::PublicationConfig;
use bomkit_util::errors::BomkitError;

use crate::publication::CatalogPublication;

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Render the POM of a catalog publication.
///
/// The POM carries no dependencies: consumers resolve the catalog through
/// the Gradle module metadata, which the marker comment points them to.
pub fn render_pom(publication: &CatalogPublication, meta: &PublicationConfig) -> miette::Result<String> {
    let mut pom = PomWriter::new();
    pom.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    pom.event(Event::Start(BytesStart::new("project").with_attributes([
        ("xmlns", POM_NAMESPACE),
        ("xmlns:xsi", XSI_NAMESPACE),
        ("xsi:schemaLocation", POM_SCHEMA_LOCATION),
    ])))?;
    pom.event(Event::Comment(BytesText::new(
        " This module was also published with a richer model, Gradle metadata,  ",
    )))?;
    pom.event(Event::Comment(BytesText::new(
        " which should be used instead. Do not delete the following line which  ",
    )))?;
    pom.event(Event::Comment(BytesText::new(
        " is to indicate to Gradle or any Gradle module metadata file consumer  ",
    )))?;
    pom.event(Event::Comment(BytesText::new(
        " that they should prefer consuming it instead. ",
    )))?;
    pom.event(Event::Comment(BytesText::new(
        " do_not_remove: published-with-gradle-metadata ",
    )))?;

    pom.text("modelVersion", "4.0.0")?;
    pom.text("groupId", &publication.group_id)?;
    pom.text("artifactId", &publication.artifact_id)?;
    pom.text("version", &publication.version)?;
    pom.text("packaging", &publication.packaging)?;
    pom.text("name", meta.name.as_deref().unwrap_or(&meta.description))?;
    pom.text("description", &meta.description)?;
    pom.text("url", &meta.url)?;

    pom.start("licenses")?;
    pom.start("license")?;
    pom.text("name", &meta.license_name)?;
    pom.text("url", &meta.license_url)?;
    pom.end("license")?;
    pom.end("licenses")?;

    pom.start("developers")?;
    pom.start("developer")?;
    pom.text("id", &meta.developer_id)?;
    pom.text("name", &meta.developer_name)?;
    pom.text("organization", &meta.organization)?;
    pom.text("organizationUrl", &meta.organization_url)?;
    pom.end("developer")?;
    pom.end("developers")?;

    pom.start("scm")?;
    pom.text("url", &meta.scm_url)?;
    pom.end("scm")?;

    pom.end("project")?;
    pom.finish()
}

struct PomWriter {
    writer: Writer<Vec<u8>>,
}

impl PomWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> miette::Result<()> {
        self.writer.write_event(event).map_err(|e| {
            BomkitError::Publication {
                message: format!("Failed to write POM: {e}"),
            }
            .into()
        })
    }

    fn start(&mut self, name: &str) -> miette::Result<()> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> miette::Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text(&mut self, name: &str, value: &str) -> miette::Result<()> {
        self.start(name)?;
        self.event(Event::Text(BytesText::new(value)))?;
        self.end(name)
    }

    fn finish(self) -> miette::Result<String> {
        let mut xml = String::from_utf8(self.writer.into_inner()).map_err(|e| BomkitError::Publication {
            message: format!("POM is not valid UTF-8: {e}"),
        })?;
        xml.push('\n');
        Ok(xml)
    }
}

/// Read the text of every leaf element of a POM, keyed by its element path
/// (`project>groupId`, `project>licenses>license>name`, ...).
///
/// Repeated paths keep their first value.
pub fn read_pom_fields(xml: &str) -> miette::Result<BTreeMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut fields = BTreeMap::new();
    let mut path: Vec<String> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                fields.entry(path.join(">")).or_insert(text);
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(BomkitError::Publication {
                    message: format!("Failed to parse POM: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }
    Ok(fields)
}
