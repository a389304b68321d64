//! Canned replies served when Gemini quota is exhausted or any error happens.
//!
//! The texts are short and heritage-themed so the app still feels smart
//! while the live model is unreachable.

/// Reply for an empty or missing message; served without calling upstream.
pub const EMPTY_PROMPT_REPLY: &str = "You didn’t type a question. Try asking about a monument, \
     a time period, or nearby heritage sites!";

const KONARK_REPLY: &str = "I’ve hit today’s limit for live AI answers, but here’s a quick \
     highlight about the Konark Sun Temple:\n\n\
     • 13th-century Sun temple in Odisha, built by King Narasimhadeva I.\n\
     • Designed as Surya’s stone chariot with 24 carved wheels and seven horses.\n\
     • Famous for its detailed stone carvings and is a UNESCO World Heritage Site.\n\n\
     You can explore more details through the Konark card and AR model in this app.";

const NEARBY_REPLY: &str = "Right now I can’t fetch live AI results, but you can still explore \
     amazing Indian heritage sites like:\n\n\
     • Taj Mahal – Agra, Uttar Pradesh\n\
     • Hampi – Karnataka\n\
     • Qutub Minar – Delhi\n\
     • Konark Sun Temple – Odisha\n\n\
     Use the ‘Explore Sites’ section in this app to browse places and start your own \
     pocket heritage tour.";

const GUIDED_WALK_REPLY: &str = "Our live AI guide has reached its free question limit for \
     today, but here’s a simple guided-walk idea you can follow at any monument:\n\n\
     1️⃣ Start at the main entrance – notice the gateway design and symbols.\n\
     2️⃣ Move to the central shrine or hall – look at pillars, ceilings and carvings.\n\
     3️⃣ Walk around the outer corridor – many temples use this as a pradakshina path.\n\
     4️⃣ End at an open vantage point – observe how the monument sits in its landscape.\n\n\
     You can mirror this flow using the AR model and info cards inside the app.";

const MONUMENT_REPLY: &str = "I can’t reach the live AI model right now, but here’s a general \
     way to understand any Indian monument:\n\n\
     • Check the time period: Sultanate, Mughal, Chola, Vijayanagara, etc.\n\
     • Look for materials used: sandstone, marble, granite, brick.\n\
     • Notice patterns: arches, domes, shikharas, pillars, jalis, murals.\n\
     • Read any inscription plates for dates and donors.\n\n\
     Use the site description, fun facts and AR model in this app to connect these points \
     to the monument you’re viewing.";

const DEFAULT_REPLY: &str = "Our heritage guide has answered a lot today and the live AI limit \
     has been reached, so I’m serving a preset response instead of a fresh AI reply.\n\n\
     You can still:\n\
     • Explore site cards to read curated descriptions and facts.\n\
     • Use the AR view to inspect 3D models closely.\n\
     • Try quizzes and guided flows built inside the app.\n\n\
     Come back later or switch to another API key/plan to re-enable live AI answers.";

/// One fallback rule: any keyword matching (case-insensitively) selects
/// the paired reply.
struct FallbackRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Ordered rule list, first match wins.
const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["konark"],
        reply: KONARK_REPLY,
    },
    FallbackRule {
        keywords: &["nearby", "near me"],
        reply: NEARBY_REPLY,
    },
    FallbackRule {
        keywords: &["guided", "walk", "tour"],
        reply: GUIDED_WALK_REPLY,
    },
    FallbackRule {
        keywords: &["explain", "history", "monument"],
        reply: MONUMENT_REPLY,
    },
];

/// Picks the fallback reply for a prompt.
///
/// Pure and total: same prompt always yields the same text, an empty
/// prompt falls through to the generic default.
pub fn fallback_reply(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();

    FALLBACK_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}
