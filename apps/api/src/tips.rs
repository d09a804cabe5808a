use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TipCategory {
    pub category: &'static str,
    pub tips: &'static [&'static str],
}

/// Writing advice shown on the tips page.
pub const TIPS: &[TipCategory] = &[
    TipCategory {
        category: "Content Structure",
        tips: &[
            "Start with a compelling hook in the first line",
            "Use bullet points or numbered lists for readability",
            "Keep paragraphs short (2-3 sentences max)",
            "End with a call-to-action or question",
        ],
    },
    TipCategory {
        category: "Engagement",
        tips: &[
            "Ask questions to encourage comments",
            "Use 'you' and 'your' to make it personal",
            "Share personal experiences when relevant",
            "Tag relevant people or companies",
        ],
    },
    TipCategory {
        category: "Hashtags",
        tips: &[
            "Use 3-5 relevant hashtags",
            "Mix popular and niche hashtags",
            "Research trending hashtags in your industry",
            "Create your own branded hashtag",
        ],
    },
    TipCategory {
        category: "Best Practices",
        tips: &[
            "Post consistently (2-3 times per week)",
            "Engage with comments within 24 hours",
            "Use high-quality images when possible",
            "Monitor your post performance",
        ],
    },
    TipCategory {
        category: "What to Avoid",
        tips: &[
            "Don't use too many hashtags (max 5)",
            "Avoid overly promotional language",
            "Don't ignore negative comments",
            "Avoid posting the same content repeatedly",
        ],
    },
    TipCategory {
        category: "Optimization",
        tips: &[
            "Post during peak hours (8-10 AM, 12-2 PM)",
            "Use LinkedIn's native video when possible",
            "Include relevant keywords naturally",
            "Test different content formats",
        ],
    },
];
