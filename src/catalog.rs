//! Static catalogue of deliverability checks.
//!
//! Every check is declared here with its category, title, full-credit weight
//! and remediation priority. Analyzers evaluate the predicates and partial
//! credit, but titles, weights and priorities live in one place so that the
//! scoring policy can be read (and tested) as a table.
//!
//! Weights within a category sum to exactly
//! [`MAX_CATEGORY_SCORE`](crate::score::MAX_CATEGORY_SCORE).

use crate::score::{Category, CheckResult, Priority};

/// Catalogue entry: static metadata of one check.
#[derive(Debug, Clone, Copy)]
pub struct CheckDef {
    /// Category this check belongs to
    pub category: Category,
    /// Stable display title
    pub title: &'static str,
    /// Points granted on full pass
    pub weight: u32,
    /// Remediation priority when the check fails
    pub priority: Priority,
}

/// Identifiers of all catalogued checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CheckId {
    // Structure
    Doctype,
    TitleTag,
    LayoutTables,
    NoExternalCss,
    InlineCss,
    OptimalWidth,
    Preheader,
    NoBase64Images,
    // Content
    TextLength,
    TextRatio,
    SpamWords,
    UppercaseUsage,
    Exclamations,
    ReadableWithoutImages,
    ContentPhysicalAddress,
    // Images
    ImageCount,
    ImageAltAttributes,
    ImageDimensions,
    ImageHosting,
    // Links
    LinkCount,
    HttpsLinks,
    UnsubscribeLink,
    DescriptiveLinkText,
    ListUnsubscribeHeader,
    // Performance
    HtmlWeight,
    TotalWeight,
    ExternalRequests,
    NoJavascript,
    NoForms,
    // Compliance
    ComplianceUnsubscribe,
    CompliancePostalAddress,
    PreheaderOptimized,
    SenderIdentity,
    MobileOptimization,
}

impl CheckId {
    /// Catalogue definition of this check.
    #[must_use]
    pub const fn def(self) -> CheckDef {
        use Category::{Compliance, Content, Images, Links, Performance, Structure};
        use Priority::{High, Low, Medium};

        match self {
            Self::Doctype => CheckDef {
                category: Structure,
                title: "DOCTYPE HTML5",
                weight: 12,
                priority: Medium,
            },
            Self::TitleTag => CheckDef {
                category: Structure,
                title: "Balise <title>",
                weight: 8,
                priority: Low,
            },
            Self::LayoutTables => CheckDef {
                category: Structure,
                title: "Utilisation de tableaux",
                weight: 15,
                priority: Low,
            },
            Self::NoExternalCss => CheckDef {
                category: Structure,
                title: "Pas de CSS externe",
                weight: 15,
                priority: Medium,
            },
            Self::InlineCss => CheckDef {
                category: Structure,
                title: "CSS inline présent",
                weight: 15,
                priority: Low,
            },
            Self::OptimalWidth => CheckDef {
                category: Structure,
                title: "Largeur optimale (600-650px)",
                weight: 12,
                priority: Low,
            },
            Self::Preheader => CheckDef {
                category: Structure,
                title: "Pre-header présent",
                weight: 13,
                priority: Medium,
            },
            Self::NoBase64Images => CheckDef {
                category: Structure,
                title: "Pas d'images Base64",
                weight: 10,
                priority: Medium,
            },

            Self::TextLength => CheckDef {
                category: Content,
                title: "Longueur du texte suffisante",
                weight: 15,
                priority: Low,
            },
            Self::TextRatio => CheckDef {
                category: Content,
                title: "Ratio texte/HTML",
                weight: 15,
                priority: Medium,
            },
            Self::SpamWords => CheckDef {
                category: Content,
                title: "Mots à risque spam",
                weight: 20,
                priority: Low,
            },
            Self::UppercaseUsage => CheckDef {
                category: Content,
                title: "Utilisation des majuscules",
                weight: 12,
                priority: Low,
            },
            Self::Exclamations => CheckDef {
                category: Content,
                title: "Points d'exclamation",
                weight: 10,
                priority: Low,
            },
            Self::ReadableWithoutImages => CheckDef {
                category: Content,
                title: "Email lisible sans images",
                weight: 18,
                priority: Medium,
            },
            Self::ContentPhysicalAddress => CheckDef {
                category: Content,
                title: "Adresse physique dans le footer",
                weight: 10,
                priority: Low,
            },

            Self::ImageCount => CheckDef {
                category: Images,
                title: "Nombre d'images approprié",
                weight: 20,
                priority: Low,
            },
            Self::ImageAltAttributes => CheckDef {
                category: Images,
                title: "Attributs alt sur TOUTES les images",
                weight: 30,
                priority: High,
            },
            Self::ImageDimensions => CheckDef {
                category: Images,
                title: "Dimensions des images spécifiées",
                weight: 20,
                priority: Low,
            },
            Self::ImageHosting => CheckDef {
                category: Images,
                title: "Images hébergées en ligne",
                weight: 30,
                priority: Low,
            },

            Self::LinkCount => CheckDef {
                category: Links,
                title: "Nombre de liens optimal",
                weight: 20,
                priority: Low,
            },
            Self::HttpsLinks => CheckDef {
                category: Links,
                title: "Protocole HTTPS sur tous les liens",
                weight: 25,
                priority: High,
            },
            Self::UnsubscribeLink => CheckDef {
                category: Links,
                title: "Lien de désinscription OBLIGATOIRE",
                weight: 30,
                priority: High,
            },
            Self::DescriptiveLinkText => CheckDef {
                category: Links,
                title: "Texte descriptif des liens",
                weight: 15,
                priority: Low,
            },
            Self::ListUnsubscribeHeader => CheckDef {
                category: Links,
                title: "List-Unsubscribe header",
                weight: 10,
                priority: Low,
            },

            Self::HtmlWeight => CheckDef {
                category: Performance,
                title: "Poids HTML < 102KB (Gmail)",
                weight: 35,
                priority: High,
            },
            Self::TotalWeight => CheckDef {
                category: Performance,
                title: "Poids total < 500KB",
                weight: 20,
                priority: Low,
            },
            Self::ExternalRequests => CheckDef {
                category: Performance,
                title: "Requêtes externes limitées",
                weight: 15,
                priority: Low,
            },
            Self::NoJavascript => CheckDef {
                category: Performance,
                title: "Pas de JavaScript",
                weight: 15,
                priority: Medium,
            },
            Self::NoForms => CheckDef {
                category: Performance,
                title: "Pas de formulaires",
                weight: 15,
                priority: Low,
            },

            Self::ComplianceUnsubscribe => CheckDef {
                category: Compliance,
                title: "Lien de désinscription visible",
                weight: 30,
                priority: High,
            },
            Self::CompliancePostalAddress => CheckDef {
                category: Compliance,
                title: "Adresse postale physique",
                weight: 25,
                priority: High,
            },
            Self::PreheaderOptimized => CheckDef {
                category: Compliance,
                title: "Pre-header optimisé",
                weight: 20,
                priority: Medium,
            },
            Self::SenderIdentity => CheckDef {
                category: Compliance,
                title: "Identification de l'expéditeur",
                weight: 15,
                priority: Low,
            },
            Self::MobileOptimization => CheckDef {
                category: Compliance,
                title: "Optimisation mobile",
                weight: 10,
                priority: Low,
            },
        }
    }

    /// Points granted on full pass.
    #[must_use]
    pub const fn weight(self) -> u32 {
        self.def().weight
    }

    /// Build a [`CheckResult`] for this check from the catalogue metadata.
    pub fn result(self, pass: bool, description: impl Into<String>) -> CheckResult {
        let def = self.def();
        CheckResult::new(pass, def.title, description, def.priority)
    }

    /// All catalogued checks, grouped by declaration order.
    #[must_use]
    pub const fn all() -> &'static [CheckId] {
        &[
            Self::Doctype,
            Self::TitleTag,
            Self::LayoutTables,
            Self::NoExternalCss,
            Self::InlineCss,
            Self::OptimalWidth,
            Self::Preheader,
            Self::NoBase64Images,
            Self::TextLength,
            Self::TextRatio,
            Self::SpamWords,
            Self::UppercaseUsage,
            Self::Exclamations,
            Self::ReadableWithoutImages,
            Self::ContentPhysicalAddress,
            Self::ImageCount,
            Self::ImageAltAttributes,
            Self::ImageDimensions,
            Self::ImageHosting,
            Self::LinkCount,
            Self::HttpsLinks,
            Self::UnsubscribeLink,
            Self::DescriptiveLinkText,
            Self::ListUnsubscribeHeader,
            Self::HtmlWeight,
            Self::TotalWeight,
            Self::ExternalRequests,
            Self::NoJavascript,
            Self::NoForms,
            Self::ComplianceUnsubscribe,
            Self::CompliancePostalAddress,
            Self::PreheaderOptimized,
            Self::SenderIdentity,
            Self::MobileOptimization,
        ]
    }
}
