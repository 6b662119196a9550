//! Marketing and analytics tag detection.

use crate::utils::FlagMap;

/// A third-party tag and the lowercase HTML signatures that reveal it.
struct TagRule {
    key: &'static str,
    signatures: &'static [&'static str],
}

/// Detected tags, in rule order. Every check is independent of the others.
const TAG_RULES: &[TagRule] = &[
    TagRule {
        key: "googleAnalytics",
        signatures: &[
            "google-analytics.com/analytics.js",
            "google-analytics.com/ga.js",
            "ga('create'",
            "ga(\"create\"",
            "_gaq.push",
        ],
    },
    TagRule {
        key: "googleAnalytics4",
        signatures: &["gtag/js?id=g-", "gtag('config', 'g-", "gtag(\"config\", \"g-"],
    },
    TagRule {
        key: "googleTagManager",
        signatures: &["googletagmanager.com/gtm.js", "googletagmanager.com/ns.html"],
    },
    TagRule {
        key: "googleAds",
        signatures: &[
            "googleadservices.com",
            "googleads.g.doubleclick.net",
            "gtag/js?id=aw-",
            "gtag('config', 'aw-",
            "gtag(\"config\", \"aw-",
        ],
    },
    TagRule {
        key: "metaPixel",
        signatures: &["connect.facebook.net", "fbevents.js", "fbq('init'", "fbq(\"init\""],
    },
    TagRule {
        key: "hotjar",
        signatures: &["static.hotjar.com", "_hjsettings"],
    },
    TagRule {
        key: "microsoftClarity",
        signatures: &["clarity.ms/tag", "www.clarity.ms"],
    },
    TagRule {
        key: "yandexMetrica",
        signatures: &["mc.yandex.ru", "mc.yandex.com", "metrika/tag.js"],
    },
    TagRule {
        key: "linkedinInsight",
        signatures: &["snap.licdn.com", "_linkedin_partner_id"],
    },
    TagRule {
        key: "tiktokPixel",
        signatures: &["analytics.tiktok.com", "ttq.load"],
    },
    TagRule {
        key: "twitterPixel",
        signatures: &["static.ads-twitter.com", "twq('init'", "twq(\"init\""],
    },
    TagRule {
        key: "pinterestTag",
        signatures: &["s.pinimg.com/ct/core.js", "pintrk('load'", "pintrk(\"load\""],
    },
    TagRule {
        key: "mailchimp",
        signatures: &["chimpstatic.com", "list-manage.com"],
    },
    TagRule {
        key: "hubspot",
        signatures: &["js.hs-scripts.com", "js.hsforms.net", "js.hs-analytics.net"],
    },
    TagRule {
        key: "klaviyo",
        signatures: &["static.klaviyo.com", "klaviyo.com/onsite"],
    },
    TagRule {
        key: "sendpulse",
        signatures: &["sendpulse.com"],
    },
    TagRule {
        key: "intercom",
        signatures: &["widget.intercom.io", "intercomsettings"],
    },
    TagRule {
        key: "drift",
        signatures: &["js.driftt.com", "drift.load("],
    },
    TagRule {
        key: "tawkTo",
        signatures: &["embed.tawk.to"],
    },
    TagRule {
        key: "jivoChat",
        signatures: &["code.jivosite.com", "code.jivo.ru", "jivosite.com"],
    },
    TagRule {
        key: "crisp",
        signatures: &["client.crisp.chat", "$crisp"],
    },
    TagRule {
        key: "zendeskChat",
        signatures: &["static.zdassets.com", "zopim.com"],
    },
    TagRule {
        key: "optimizely",
        signatures: &["cdn.optimizely.com", "optimizely.com/js"],
    },
    TagRule {
        key: "vwo",
        signatures: &["visualwebsiteoptimizer.com", "_vwo_code"],
    },
    TagRule {
        key: "googleOptimize",
        signatures: &["googleoptimize.com", "optimize.js?id="],
    },
    TagRule {
        key: "crazyEgg",
        signatures: &["script.crazyegg.com", "crazyegg.com/pages"],
    },
    TagRule {
        key: "mouseflow",
        signatures: &["cdn.mouseflow.com", "mouseflow.com/projects"],
    },
    TagRule {
        key: "segment",
        signatures: &["cdn.segment.com", "cdn.segment.io"],
    },
];

/// Presence of every known tag, keyed by tag name in rule order.
pub type TagPresence = FlagMap;

/// Checks the lowercased HTML for every known analytics and marketing tag.
pub fn detect_marketing_tags(html_lower: &str) -> TagPresence {
    TAG_RULES
        .iter()
        .map(|rule| {
            (
                rule.key,
                rule.signatures.iter().any(|sig| html_lower.contains(sig)),
            )
        })
        .collect()
}
