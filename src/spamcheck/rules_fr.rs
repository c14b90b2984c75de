//! French translations of SpamAssassin rule identifiers.
//!
//! The service reports terse technical rule names; this table maps the
//! common ones to actionable French messaging and a remediation priority.
//! Unknown rules fall back to a lightly cleaned version of the original
//! description at medium priority.

use crate::score::Priority;
use regex::Regex;
use std::sync::LazyLock;

/// Static translation of one rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleTranslation {
    pub title: &'static str,
    pub description: &'static str,
    pub solution: &'static str,
    pub priority: Priority,
}

/// Translated rule hit ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub title: String,
    pub description: String,
    pub solution: Option<String>,
    pub priority: Priority,
}

#[rustfmt::skip]
static RULES_FR: &[(&str, RuleTranslation)] = &[
    ("MIME_HTML_ONLY", RuleTranslation {
        title: "Email HTML uniquement",
        description: "Votre email ne contient qu'une version HTML, sans version texte brut.",
        solution: "Envoyez en format multipart/alternative avec une version texte ET HTML.",
        priority: Priority::Medium,
    }),
    ("MISSING_MID", RuleTranslation {
        title: "En-tête Message-ID manquant",
        description: "L'email ne contient pas d'identifiant unique (Message-ID).",
        solution: "Ajoutez un header Message-ID avec un identifiant unique.",
        priority: Priority::Low,
    }),
    ("MISSING_DATE", RuleTranslation {
        title: "En-tête Date manquant",
        description: "L'email ne contient pas de date d'envoi.",
        solution: "Vérifiez que votre serveur SMTP ajoute bien le header Date.",
        priority: Priority::Medium,
    }),
    ("MISSING_FROM", RuleTranslation {
        title: "Expéditeur manquant",
        description: "Le champ From (expéditeur) est absent ou invalide.",
        solution: "Vérifiez la configuration de votre expéditeur.",
        priority: Priority::High,
    }),
    ("MISSING_SUBJECT", RuleTranslation {
        title: "Sujet manquant",
        description: "L'email n'a pas de sujet.",
        solution: "Ajoutez un sujet clair et descriptif.",
        priority: Priority::High,
    }),
    ("SUBJ_ALL_CAPS", RuleTranslation {
        title: "Sujet en majuscules",
        description: "Le sujet est entièrement en MAJUSCULES, typique des spams.",
        solution: "Réécrivez le sujet en casse normale.",
        priority: Priority::High,
    }),
    ("MANY_EXCLAMATIONS", RuleTranslation {
        title: "Trop de points d'exclamation",
        description: "Le sujet ou le contenu contient des points d'exclamation multiples (!!!).",
        solution: "Restez sobre dans la ponctuation, un seul suffit.",
        priority: Priority::Medium,
    }),
    ("UPPERCASE_50_75", RuleTranslation {
        title: "Beaucoup de majuscules (50-75%)",
        description: "Plus de la moitié du texte est en MAJUSCULES.",
        solution: "Utilisez les majuscules avec modération, uniquement pour les titres.",
        priority: Priority::High,
    }),
    ("UPPERCASE_75_100", RuleTranslation {
        title: "Trop de majuscules (>75%)",
        description: "La quasi-totalité du texte est en MAJUSCULES.",
        solution: "Réécrivez votre email en casse normale.",
        priority: Priority::High,
    }),
    ("MONEY_WORD", RuleTranslation {
        title: "Mots liés à l'argent",
        description: "Le contenu utilise des mots typiques des arnaques financières.",
        solution: "Modérez l'usage de GRATUIT, ARGENT, CASH, GAGNER, surtout dans le sujet.",
        priority: Priority::High,
    }),
    ("URGENT_WORD", RuleTranslation {
        title: "Fausse urgence",
        description: "Utilisation de mots créant une pression temporelle artificielle.",
        solution: "Évitez URGENT et AGISSEZ MAINTENANT en majuscules.",
        priority: Priority::Medium,
    }),
    ("CLICK_HERE", RuleTranslation {
        title: "Lien générique \"Cliquez ici\"",
        description: "Les liens \"Cliquez ici\" ou \"Click here\" sont typiques du spam.",
        solution: "Rendez vos liens descriptifs : \"Découvrir nos produits\" plutôt que \"Cliquez ici\".",
        priority: Priority::Medium,
    }),
    ("HTTP_ESCAPED_HOST", RuleTranslation {
        title: "URL encodée suspecte",
        description: "L'URL contient des caractères encodés de manière suspecte.",
        solution: "Utilisez des URLs propres et lisibles sans encodage excessif.",
        priority: Priority::Medium,
    }),
    ("BAYES_99", RuleTranslation {
        title: "Contenu identifié comme spam",
        description: "Le filtre bayésien identifie votre email comme spam à 99%.",
        solution: "Réécrivez le contenu : changez le vocabulaire, le ton et la structure.",
        priority: Priority::High,
    }),
    ("BAYES_95", RuleTranslation {
        title: "Contenu très suspect",
        description: "Le filtre bayésien classe votre email comme spam probable (95%).",
        solution: "Évitez les mots spam et le sensationnalisme, adoptez un ton factuel.",
        priority: Priority::High,
    }),
    ("BAYES_50", RuleTranslation {
        title: "Contenu ambigu",
        description: "Le filtre hésite : 50% spam, 50% légitime.",
        solution: "Clarifiez votre message et signez avec vos vraies coordonnées.",
        priority: Priority::Low,
    }),
    ("SPF_PASS", RuleTranslation {
        title: "SPF validé",
        description: "Votre serveur d'envoi est autorisé (SPF pass).",
        solution: "Aucune action requise.",
        priority: Priority::Low,
    }),
    ("SPF_FAIL", RuleTranslation {
        title: "Échec SPF",
        description: "Votre serveur d'envoi n'est pas autorisé à envoyer pour ce domaine.",
        solution: "Configurez l'enregistrement SPF dans le DNS de votre domaine.",
        priority: Priority::High,
    }),
    ("DKIM_VALID", RuleTranslation {
        title: "DKIM validé",
        description: "Votre email est correctement signé avec DKIM.",
        solution: "Aucune action requise.",
        priority: Priority::Low,
    }),
    ("DKIM_INVALID", RuleTranslation {
        title: "Signature DKIM invalide",
        description: "La signature DKIM est présente mais invalide.",
        solution: "Vérifiez la configuration DKIM de votre serveur d'envoi.",
        priority: Priority::High,
    }),
    ("DMARC_PASS", RuleTranslation {
        title: "DMARC validé",
        description: "Votre email passe les vérifications DMARC.",
        solution: "Aucune action requise.",
        priority: Priority::Low,
    }),
    ("HTML_IMAGE_ONLY", RuleTranslation {
        title: "Email réduit à une image",
        description: "Votre email est juste une grande image, sans texte HTML.",
        solution: "Ajoutez du vrai texte HTML : titre, résumé et CTA au minimum.",
        priority: Priority::High,
    }),
    ("HTML_IMAGE_RATIO_02", RuleTranslation {
        title: "Trop d'images, pas assez de texte",
        description: "Le ratio images/texte est déséquilibré.",
        solution: "Visez au moins 60% de texte pour 40% d'images.",
        priority: Priority::Medium,
    }),
    ("EMPTY_MESSAGE", RuleTranslation {
        title: "Email vide",
        description: "L'email ne contient aucun contenu.",
        solution: "Ajoutez du contenu à votre email.",
        priority: Priority::High,
    }),
    ("CHARSET_FARAWAY", RuleTranslation {
        title: "Encodage de caractères inhabituel",
        description: "Utilisation d'un charset inhabituel pour votre langue.",
        solution: "Utilisez UTF-8 pour les emails en français ou en anglais.",
        priority: Priority::Low,
    }),
    ("RCVD_IN_XBL", RuleTranslation {
        title: "IP dans une blacklist (XBL)",
        description: "L'IP d'envoi est listée dans une blacklist de spam.",
        solution: "Demandez le retrait de la blacklist à votre fournisseur d'envoi.",
        priority: Priority::High,
    }),
    ("RCVD_IN_PBL", RuleTranslation {
        title: "IP dynamique détectée (PBL)",
        description: "L'IP d'envoi semble être une IP dynamique ou résidentielle.",
        solution: "Utilisez un serveur SMTP professionnel avec IP fixe.",
        priority: Priority::High,
    }),
    ("FREEMAIL_FROM", RuleTranslation {
        title: "Email gratuit détecté",
        description: "L'expéditeur utilise une adresse email gratuite (Gmail, Yahoo, etc.).",
        solution: "Pour des envois professionnels, utilisez votre propre domaine.",
        priority: Priority::Low,
    }),
    ("NO_RECEIVED", RuleTranslation {
        title: "Headers de routage manquants",
        description: "L'email n'a pas de headers Received indiquant son parcours.",
        solution: "Assurez-vous que votre client email ajoute correctement les headers.",
        priority: Priority::Medium,
    }),
];

static BODY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)BODY:").expect("valid body prefix regex"));
static SUBJECT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SUBJECT:").expect("valid subject prefix regex"));
static HTML_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Message only has text/html MIME parts").expect("valid html-only regex")
});
static MISSING_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Missing .* header").expect("valid missing header regex"));

/// Translate a rule identifier, falling back to the service's description.
///
/// Exact match first, then substring match in both directions to cover
/// suffixed variants such as `BAYES_99_2`. Untranslated rules carry medium
/// priority and no solution line.
pub fn translate(rule_id: &str, original_description: &str) -> Translated {
    let exact = RULES_FR.iter().find(|(key, _)| *key == rule_id);
    let partial = || {
        RULES_FR
            .iter()
            .find(|(key, _)| rule_id.contains(key) || key.contains(rule_id))
    };

    if let Some((_, t)) = exact.or_else(partial) {
        return Translated {
            title: t.title.to_string(),
            description: t.description.to_string(),
            solution: Some(t.solution.to_string()),
            priority: t.priority,
        };
    }

    let mut description = if original_description.is_empty() {
        rule_id.to_string()
    } else {
        original_description.to_string()
    };
    description = BODY_PREFIX.replace(&description, "Contenu :").into_owned();
    description = SUBJECT_PREFIX.replace(&description, "Sujet :").into_owned();
    description = HTML_ONLY
        .replace(&description, "Email HTML uniquement (pas de version texte)")
        .into_owned();
    description = MISSING_HEADER.replace(&description, "En-tête manquant").into_owned();

    Translated {
        title: rule_id.to_string(),
        description,
        solution: None,
        priority: Priority::Medium,
    }
}
