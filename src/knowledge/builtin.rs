//! Built-in dictionary and FAQ table for LalNova Technologies.

use crate::knowledge::base::{CategoryEntry, KnowledgeBase};

static DICTIONARY: &[&str] = &[
    // Tech terms
    "software", "development", "consulting", "cloud", "integration", "system", "technology",
    "programming", "database", "website", "application", "mobile", "web", "api", "server",
    "security", "analytics", "dashboard", "platform", "solution", "digital", "transformation",
    // Business terms
    "services", "pricing", "quote", "estimate", "project", "portfolio", "company", "team",
    "contact", "phone", "email", "address", "consultation", "meeting", "schedule", "time",
    // Common words
    "hello", "hi", "help", "about", "what", "how", "when", "where", "why", "who", "can",
    "could", "would", "should", "will", "need", "want", "like", "know", "information",
    "details", "more", "please", "thank", "thanks", "good", "great", "excellent", "amazing",
    "awesome", "perfect", "wonderful", "fantastic",
];

struct StaticCategory {
    label: &'static str,
    keywords: &'static [&'static str],
    response: &'static str,
}

// Order matters: the first category with a matching keyword answers.
static CATEGORIES: &[StaticCategory] = &[
    StaticCategory {
        label: "greeting",
        keywords: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        response: "Hello! Welcome to LalNova Technologies. We're here to help you with your \
                   technology needs. What would you like to know about our services?",
    },
    StaticCategory {
        label: "services",
        keywords: &[
            "services",
            "what do you do",
            "what services",
            "offerings",
            "solutions",
            "development time",
        ],
        response: "We offer comprehensive technology solutions including:\n\
                   • Custom Software Development\n\
                   • IT Consulting\n\
                   • Cloud Solutions\n\
                   • System Integration\n\
                   • Digital Transformation\n\n\
                   Would you like to know more about any specific service?",
    },
    StaticCategory {
        label: "contact",
        keywords: &["contact", "phone", "email", "address", "reach", "get in touch"],
        response: "You can reach us at:\n\
                   📧 Email: info@lalnova.com\n\
                   📞 Phone: +1 (555) 123-4567\n\
                   📍 Address: 123 Tech Street, Innovation City\n\n\
                   Or you can fill out our contact form and we'll get back to you within 24 hours!",
    },
    StaticCategory {
        label: "pricing",
        keywords: &["price", "cost", "pricing", "quote", "estimate", "budget"],
        response: "Our pricing varies based on project scope and requirements. We offer \
                   competitive rates and flexible packages. Would you like to schedule a free \
                   consultation to discuss your specific needs and get a custom quote?",
    },
    StaticCategory {
        label: "about",
        keywords: &["about", "company", "who are you", "team", "history"],
        response: "LalNova Technologies is a forward-thinking tech company founded in 2025. We \
                   specialize in building modern solutions for businesses. Our team of experts \
                   is dedicated to delivering innovative technology solutions that drive growth \
                   and digital transformation.",
    },
    StaticCategory {
        label: "projects",
        keywords: &["projects", "portfolio", "work", "examples", "case studies"],
        response: "We've successfully completed 50+ projects across various industries. Our \
                   portfolio includes e-commerce platforms, healthcare management systems, and \
                   financial analytics dashboards. Visit our Projects page to see our latest work!",
    },
    StaticCategory {
        label: "development_time",
        keywords: &[
            "bellow three months",
            "between 3 to 6 months",
            "more than 6 months",
            "more than a year",
            "it nees further discussion",
        ],
        response: "Complicated systems take more than 6 months, medium ones take 3 to 6 months \
                   and simple websites take up to 4 weeks.",
    },
];

const DEFAULT_RESPONSE: &str = "I understand you're asking about that topic. For detailed \
                                information, I'd recommend:\n\
                                • Browsing our website sections\n\
                                • Contacting our team directly\n\
                                • Scheduling a consultation\n\n\
                                Is there anything specific about our services I can help you with?";

pub(crate) fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        dictionary: DICTIONARY.iter().map(|w| w.to_string()).collect(),
        categories: CATEGORIES
            .iter()
            .map(|c| CategoryEntry {
                label: c.label.to_string(),
                keywords: c.keywords.iter().map(|k| k.to_string()).collect(),
                response: c.response.to_string(),
            })
            .collect(),
        default_response: DEFAULT_RESPONSE.to_string(),
    }
}
