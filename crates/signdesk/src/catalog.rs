//! Document catalog for signdesk.
//!
//! This module defines the fixed, versioned-in-source document catalog and
//! the filtering operation the listing views are built on. The catalog is
//! defined once at build time and is immutable at runtime; there are no
//! create/update/delete operations.

use chrono::NaiveDate;
use serde::Serialize;

/// The catalog category a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Pay applications, lien waivers, schedules of values.
    Financial,
    /// Contracts, change orders, project setup.
    ProjectManagement,
    /// Bids, takeoffs, pricing guides.
    Estimating,
    /// Warranty and maintenance handover documents.
    Closeout,
    /// Certificates of insurance and coverage requirements.
    Insurance,
}

impl Category {
    /// The display label for this category, as used in catalog filters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::ProjectManagement => "Project Management",
            Self::Estimating => "Estimating",
            Self::Closeout => "Closeout",
            Self::Insurance => "Insurance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What role a document plays in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    /// A blank form to fill in for a new project.
    Template,
    /// A completed real-world document for reference.
    Example,
    /// Reference material such as a pricing guide.
    Guide,
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Example => write!(f, "example"),
            Self::Guide => write!(f, "guide"),
        }
    }
}

/// On-disk file format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Word document.
    Docx,
    /// PDF document.
    Pdf,
    /// Excel spreadsheet.
    Xlsx,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Docx => write!(f, "docx"),
            Self::Pdf => write!(f, "pdf"),
            Self::Xlsx => write!(f, "xlsx"),
        }
    }
}

/// Icon identifier attached to a document.
///
/// These are presentation-neutral tags; resolving them to actual glyphs or
/// assets is the consuming UI's job, keeping the data model free of
/// presentation-library types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Generic file.
    File,
    /// Text document.
    FileText,
    /// Spreadsheet.
    FileSpreadsheet,
    /// Checklist-style document.
    FileCheck,
    /// Editable form or proposal.
    FilePen,
    /// Legal or cautionary document.
    FileWarning,
    /// Certified or signed document.
    FileBadge,
}

/// A single document in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Unique stable identifier.
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Short description of what the document is for.
    pub description: &'static str,
    /// Catalog category.
    pub category: Category,
    /// Role of the document (template, example, guide).
    pub kind: DocKind,
    /// On-disk file format.
    pub file_kind: FileKind,
    /// When the document was last updated.
    pub last_updated: NaiveDate,
    /// Free-form tags used by the text filter.
    pub tags: &'static [&'static str],
    /// Icon identifier for presentation layers.
    pub icon: Icon,
    /// Resource path, or `None` if the file has not been uploaded yet.
    /// Download/view actions are disabled while this is `None`.
    pub path: Option<&'static str>,
}

impl Document {
    /// Whether the underlying file is available for download/view.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }

    /// Whether this document matches the given lowercased search needle.
    ///
    /// A document matches if the needle is a substring of the lowercased
    /// title, description, or any tag. The empty needle matches everything.
    fn matches_text(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle_lower))
    }
}

/// Category filter value that matches every document.
pub const ALL_CATEGORIES: &str = "All";

/// The fixed category filter list, in presentation order.
pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Financial",
    "Project Management",
    "Estimating",
    "Closeout",
    "Insurance",
];

/// The fixed, in-memory document catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    documents: Vec<Document>,
}

impl Catalog {
    /// The built-in catalog shipped with signdesk.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            documents: builtin_documents(),
        }
    }

    /// All documents, in insertion order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up a document by its stable id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// The fixed category filter list, including the `"All"` sentinel.
    #[must_use]
    pub fn categories() -> &'static [&'static str] {
        CATEGORIES
    }

    /// Filter the catalog by free-text search and category.
    ///
    /// A document is included iff both rules match:
    /// - text rule: the lowercased `search_text` is a substring of the
    ///   lowercased title, description, or any tag; empty text matches
    ///   everything;
    /// - category rule: `"All"` matches everything, otherwise exact string
    ///   equality against the document's category label.
    ///
    /// Results preserve catalog insertion order; there is no ranking and no
    /// pagination. An unknown category yields an empty result set, which is
    /// a valid output rather than an error.
    #[must_use]
    pub fn query(&self, search_text: &str, category: &str) -> Vec<&Document> {
        let needle = search_text.to_lowercase();
        self.documents
            .iter()
            .filter(|doc| doc.matches_text(&needle))
            .filter(|doc| category == ALL_CATEGORIES || doc.category.as_str() == category)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Construct a date for the builtin catalog.
///
/// # Panics
///
/// Panics if the date literal is invalid; builtin data is checked by tests.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid builtin catalog date")
}

/// The built-in document set.
#[allow(clippy::too_many_lines)]
fn builtin_documents() -> Vec<Document> {
    vec![
        Document {
            id: "sov-affidavit",
            title: "Schedule of Values (SOV) Affidavit",
            description: "Template for Appendix C forms with proper cost breakdown format \
                          (APCO, Gemini, Moon River line items).",
            category: Category::Financial,
            kind: DocKind::Template,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 12, 16),
            tags: &["sov", "affidavit", "pay-app", "finance"],
            icon: Icon::FileSpreadsheet,
            path: Some("documents/Schedule of Values (SOV) Affidavit_of_Subcontractor.docx"),
        },
        Document {
            id: "affidavit-pdf",
            title: "Affidavit of Subcontractor (PDF)",
            description: "Original PDF form for Affidavit of Subcontractor (Appendix C).",
            category: Category::Financial,
            kind: DocKind::Template,
            file_kind: FileKind::Pdf,
            last_updated: date(2025, 12, 16),
            tags: &["affidavit", "form", "legal"],
            icon: Icon::FileText,
            path: Some("documents/AffidavitofSbucontractorAppC_CASTLE_Mo.pdf"),
        },
        Document {
            id: "bid-doc-castle",
            title: "Bid Document - CASTLE",
            description: "Bid document for O'Fallon Center for Advanced Skills in Law \
                          Enforcement Training Center.",
            category: Category::Estimating,
            kind: DocKind::Example,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 12, 18),
            tags: &["bid", "proposal", "example"],
            icon: Icon::FilePen,
            path: Some(
                "documents/Bid-OfallonCenterforAdvancedSkillsinLawEnforcementTrainingCenter.docx",
            ),
        },
        Document {
            id: "contract-castle",
            title: "Contract - CASTLE (Signed)",
            description: "Signed contract for O'Fallon CASTLE project with DocuSign.",
            category: Category::ProjectManagement,
            kind: DocKind::Example,
            file_kind: FileKind::Pdf,
            last_updated: date(2025, 12, 18),
            tags: &["contract", "signed", "legal"],
            icon: Icon::FileBadge,
            path: Some("documents/Complete_with_DocuSign_25010110126_CASTLE_Mo.pdf"),
        },
        Document {
            id: "change-order-proposal",
            title: "Change Order Proposal Template",
            description: "Standard template for submitting change order proposals to \
                          General Contractors.",
            category: Category::ProjectManagement,
            kind: DocKind::Template,
            file_kind: FileKind::Pdf,
            last_updated: date(2025, 12, 15),
            tags: &["change-order", "proposal", "contract"],
            icon: Icon::FilePen,
            path: Some("documents/Template ChangeOrder_Proposal.pdf"),
        },
        Document {
            id: "gemini-pricing",
            title: "Gemini FY25 Pricing Guide",
            description: "Complete pricing guide for Gemini products (plaques, letters) \
                          for estimating.",
            category: Category::Estimating,
            kind: DocKind::Guide,
            file_kind: FileKind::Xlsx,
            last_updated: date(2025, 12, 13),
            tags: &["pricing", "gemini", "estimating", "catalog"],
            icon: Icon::FileText,
            path: Some("documents/Gemini FY25_US_COMPLETE_PRICING_GUIDE_R1.xlsx"),
        },
        Document {
            id: "closeout-maintenance",
            title: "Closeout: Maintenance & Warranty",
            description: "Template for project closeout documentation including maintenance \
                          instructions and warranty terms.",
            category: Category::Closeout,
            kind: DocKind::Template,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 12, 10),
            tags: &["closeout", "warranty", "maintenance", "handover"],
            icon: Icon::FileCheck,
            path: Some("documents/Closeout Document_ Maintenance & Warranty Data.docx"),
        },
        Document {
            id: "signage-takeoff",
            title: "Signage Takeoff Example",
            description: "Example of a completed signage takeoff for reference \
                          (Creek County Sheriff EOC).",
            category: Category::Estimating,
            kind: DocKind::Example,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 12, 9),
            tags: &["takeoff", "estimating", "example"],
            icon: Icon::FileText,
            path: Some("documents/Creek_County_Sheriff_EOC_Phase_II_-_Signage_Takeoff (1).docx"),
        },
        Document {
            id: "warranty-info",
            title: "Warranty & Maintenance Info",
            description: "Warranty documentation example from Francis Howell High School \
                          project.",
            category: Category::Closeout,
            kind: DocKind::Example,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 12, 1),
            tags: &["warranty", "maintenance", "example"],
            icon: Icon::FileBadge,
            path: Some("documents/FHHS WARRANTY AND MAINTENANCE INFORMATION.txt"),
        },
        Document {
            id: "lien-waiver-unconditional",
            title: "Unconditional Sub Lien Waiver",
            description: "Standard form for unconditional lien waivers required with pay \
                          applications.",
            category: Category::Financial,
            kind: DocKind::Template,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 11, 26),
            tags: &["lien-waiver", "legal", "pay-app"],
            icon: Icon::FileWarning,
            path: Some("documents/Unconditional Sub lien waiver form.doc"),
        },
        Document {
            id: "change-order-example",
            title: "Change Order Example (LCS)",
            description: "Real-world example of a completed change order for reference.",
            category: Category::ProjectManagement,
            kind: DocKind::Example,
            file_kind: FileKind::Pdf,
            last_updated: date(2025, 11, 25),
            tags: &["change-order", "example", "contract"],
            icon: Icon::FileText,
            path: Some("documents/LCS Change Order CO 001.PDF"),
        },
        Document {
            id: "coi-sample",
            title: "Sample COI for Moon River",
            description: "Example Certificate of Insurance showing standard coverage limits.",
            category: Category::Insurance,
            kind: DocKind::Example,
            file_kind: FileKind::Pdf,
            last_updated: date(2025, 11, 21),
            tags: &["insurance", "coi", "legal"],
            icon: Icon::FileBadge,
            path: Some("documents/Sample COI for Moon River.pdf"),
        },
        Document {
            id: "lien-waiver-combined",
            title: "Combined Lien Waiver Sample",
            description: "Comprehensive example of lien waivers including both Moon River \
                          and manufacturer waivers.",
            category: Category::Financial,
            kind: DocKind::Example,
            file_kind: FileKind::Pdf,
            last_updated: date(2025, 11, 21),
            tags: &["lien-waiver", "legal", "example"],
            icon: Icon::FileText,
            path: Some("documents/Sample Lien Waiver Moon River & Manufacturers.pdf"),
        },
        Document {
            id: "coi-requirements",
            title: "COI Requirements Template",
            description: "Template for extracting and documenting COI requirements from \
                          contracts.",
            category: Category::Insurance,
            kind: DocKind::Template,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 11, 15),
            tags: &["insurance", "coi", "checklist"],
            icon: Icon::FileCheck,
            path: Some("documents/COI Requirements Extracted from Takeoff Docs_Contract.txt"),
        },
        Document {
            id: "sov-example",
            title: "Schedule of Values Example",
            description: "Example Schedule of Values for WIU Sallee Hall project showing \
                          job numbering format.",
            category: Category::Financial,
            kind: DocKind::Example,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 11, 15),
            tags: &["sov", "finance", "example"],
            icon: Icon::FileSpreadsheet,
            path: Some("documents/SCHEDULE_OF_VALUES_25-007-WIU.docx"),
        },
        Document {
            id: "trello-checklist",
            title: "Trello Project Setup Checklist",
            description: "Standardized checklist for setting up new projects in Trello.",
            category: Category::ProjectManagement,
            kind: DocKind::Template,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 11, 15),
            tags: &["trello", "checklist", "setup", "pm"],
            icon: Icon::FileCheck,
            path: Some("documents/Trello_Project_Setup_Checklist.docx"),
        },
        Document {
            id: "bid-doc-template",
            title: "Latest Bid Document Template",
            description: "Current standard bid document template for Moon River Sign Company.",
            category: Category::Estimating,
            kind: DocKind::Template,
            file_kind: FileKind::Docx,
            last_updated: date(2025, 11, 14),
            tags: &["bid", "proposal", "template"],
            icon: Icon::FilePen,
            path: Some("documents/Latest 2027 Bid Doc.docx"),
        },
        Document {
            id: "rfp-response",
            title: "RFP Response Example",
            description: "Example of a Request for Proposal response (Ponca City Music).",
            category: Category::Estimating,
            kind: DocKind::Example,
            // The stored file is a legacy .doc, but the catalog format tag
            // tracks the record, not the path extension.
            file_kind: FileKind::Docx,
            last_updated: date(2025, 10, 30),
            tags: &["rfp", "proposal", "example"],
            icon: Icon::FileText,
            path: Some("documents/RFP 09 Ponca City Music.doc"),
        },
    ]
}
