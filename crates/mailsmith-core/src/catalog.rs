//! Static template catalog.
//!
//! Five categories with three variants each, plus the three quick-pick
//! templates the floating modal offers directly. All entries carry
//! `{{...}}` placeholder tokens that stay untouched until the dashboard
//! substitutes contact data, and a `[Your name]` marker the resolver
//! replaces.

use mailsmith_protocols::{Category, QuickPick, Template};

/// One (subject, content) pair within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateVariant {
    pub subject: &'static str,
    pub content: &'static str,
}

impl TemplateVariant {
    /// Materialize the variant as an owned template.
    pub fn to_template(&self) -> Template {
        Template::new(self.subject, self.content)
    }
}

const SALES: [TemplateVariant; 3] = [
    TemplateVariant {
        subject: "Improving {{company}}'s sales performance",
        content: "Hi {{first_name}},\n\nI've been following {{company}}'s growth in the {{industry}} space, and I noticed an opportunity to potentially improve your sales performance.\n\nOur platform has helped similar companies in the {{industry}} sector increase their conversion rates by 25-30% through automated, personalized outreach.\n\nWould you be open to a quick 15-minute call this week to discuss how we could help {{company}} achieve similar results?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Boost {{company}}'s revenue with proven strategies",
        content: "Hi {{first_name}},\n\nI've been researching companies in the {{industry}} sector and was particularly impressed by {{company}}'s approach to market challenges.\n\nWe specialize in helping {{industry}} companies optimize their sales processes, and our clients typically see:\n\u{2022} 40% increase in qualified leads\n\u{2022} 2x faster sales cycle\n\u{2022} 25% higher close rates\n\nI'd love to share some specific ideas for {{company}}. Would you be open to a brief call this week?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Quick idea for {{company}}'s sales growth",
        content: "Hi {{first_name}},\n\nI noticed {{company}}'s recent expansion in the {{industry}} market and wanted to reach out with a specific opportunity.\n\nWe've developed a unique approach that has helped similar companies in the {{industry}} space achieve remarkable sales growth:\n\u{2022} Automated lead qualification\n\u{2022} Personalized engagement sequences\n\u{2022} AI-powered conversion optimization\n\nCould we schedule a 15-minute call to explore how these strategies might benefit {{company}}?\n\nBest regards,\n[Your name]",
    },
];

const MARKETING: [TemplateVariant; 3] = [
    TemplateVariant {
        subject: "Enhancing {{company}}'s marketing strategy",
        content: "Hi {{first_name}},\n\nI came across {{company}}'s marketing initiatives in the {{industry}} space and wanted to reach out with some ideas.\n\nWe've developed innovative strategies that have helped companies like yours in the {{industry}} sector achieve:\n\u{2022} 40% increase in engagement rates\n\u{2022} 2x improvement in lead quality\n\u{2022} Significant reduction in customer acquisition costs\n\nWould you be interested in learning how we could adapt these strategies for {{company}}?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Transform {{company}}'s digital presence",
        content: "Hi {{first_name}},\n\nYour recent marketing campaigns at {{company}} caught my attention, and I see tremendous potential for growth in the {{industry}} space.\n\nWe've pioneered a data-driven approach that has delivered exceptional results for similar companies:\n\u{2022} 3x increase in organic reach\n\u{2022} 45% higher conversion rates\n\u{2022} Substantial ROI improvement\n\nI'd love to share some specific insights about how we could amplify {{company}}'s market presence.\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Innovative marketing solutions for {{company}}",
        content: "Hi {{first_name}},\n\nI've been following {{company}}'s growth in the {{industry}} sector and noticed an opportunity to significantly enhance your market impact.\n\nOur team has developed cutting-edge strategies that combine:\n\u{2022} AI-powered audience targeting\n\u{2022} Advanced analytics and optimization\n\u{2022} Multi-channel campaign automation\n\nWould you be interested in discussing how these approaches could benefit {{company}}?\n\nBest regards,\n[Your name]",
    },
];

const PARTNERSHIP: [TemplateVariant; 3] = [
    TemplateVariant {
        subject: "Strategic partnership opportunity - {{company}}",
        content: "Hi {{first_name}},\n\nI'm reaching out because I see tremendous potential for collaboration between our companies in the {{industry}} sector.\n\n{{company}}'s innovative approach aligns perfectly with our vision, and I believe a strategic partnership could create significant value for both organizations.\n\nI'd love to schedule a brief call to explore potential synergies and discuss how we could work together to achieve mutual growth.\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Collaboration opportunity with {{company}}",
        content: "Hi {{first_name}},\n\nI've been impressed by {{company}}'s achievements in the {{industry}} space and believe there's a unique opportunity for us to create something exceptional together.\n\nOur complementary strengths in the {{industry}} sector could lead to:\n\u{2022} Expanded market reach\n\u{2022} Enhanced product offerings\n\u{2022} Accelerated innovation\n\nWould you be open to exploring this potential partnership?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Let's create something amazing together",
        content: "Hi {{first_name}},\n\n{{company}}'s reputation for excellence in the {{industry}} sector is well-known, and I believe we have a unique opportunity to combine our strengths.\n\nI envision a partnership that could:\n\u{2022} Drive revolutionary innovation\n\u{2022} Capture new market opportunities\n\u{2022} Deliver unprecedented value to customers\n\nCould we schedule a brief call to discuss this potential collaboration?\n\nBest regards,\n[Your name]",
    },
];

const INTRODUCTION: [TemplateVariant; 3] = [
    TemplateVariant {
        subject: "Quick introduction from a fellow {{industry}} professional",
        content: "Hi {{first_name}},\n\nI hope this email finds you well. I recently came across {{company}} and was impressed by your contributions to the {{industry}} industry.\n\nI lead a team that specializes in helping companies like yours streamline their operations and accelerate growth. Some of our clients in the {{industry}} space have seen remarkable improvements in their key metrics.\n\nWould you be open to a brief conversation about how we might be able to add similar value to {{company}}?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Connecting with {{company}} - {{industry}} innovation",
        content: "Hi {{first_name}},\n\nYour work at {{company}} in the {{industry}} space has caught my attention, particularly your innovative approach to industry challenges.\n\nI've spent years helping companies in the {{industry}} sector optimize their operations and achieve sustainable growth. I believe my experience could be valuable to {{company}}'s continued success.\n\nWould you be interested in connecting for a brief discussion?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Reaching out from the {{industry}} community",
        content: "Hi {{first_name}},\n\nI came across {{company}}'s recent developments in the {{industry}} sector and was genuinely impressed by your forward-thinking approach.\n\nHaving worked with several leading companies in this space, I see some interesting opportunities for {{company}} to further strengthen its market position.\n\nCould we schedule a quick call to exchange ideas and explore potential collaboration?\n\nBest regards,\n[Your name]",
    },
];

const FOLLOWUP: [TemplateVariant; 3] = [
    TemplateVariant {
        subject: "Following up - {{company}} opportunity",
        content: "Hi {{first_name}},\n\nI wanted to follow up on my previous email about helping {{company}} optimize its operations in the {{industry}} space.\n\nI understand you're likely busy, but I truly believe we could provide significant value to your team. We've recently helped another {{industry}} company achieve:\n\u{2022} 35% efficiency improvement\n\u{2022} 45% cost reduction\n\u{2022} 60% faster time-to-market\n\nWould you be open to a quick 15-minute call this week to discuss these possibilities?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Quick check-in about {{company}}'s growth",
        content: "Hi {{first_name}},\n\nI'm following up on my previous message regarding potential opportunities for {{company}} in the {{industry}} sector.\n\nSince my last email, we've achieved some remarkable results with similar companies:\n\u{2022} Streamlined operations\n\u{2022} Increased productivity\n\u{2022} Enhanced market presence\n\nI'd love to share these insights with you. Would you have 15 minutes for a quick discussion?\n\nBest regards,\n[Your name]",
    },
    TemplateVariant {
        subject: "Re: {{company}} - Let's connect",
        content: "Hi {{first_name}},\n\nI hope you've had a chance to review my previous message about helping {{company}} excel in the {{industry}} space.\n\nI understand how busy things can get, but I believe a brief conversation could be incredibly valuable. Our recent client success stories in the {{industry}} sector have been remarkable.\n\nWould you be open to a short call this week to explore these opportunities?\n\nBest regards,\n[Your name]",
    },
];

/// The ordered variant list for a category.
pub fn variants(category: Category) -> &'static [TemplateVariant] {
    match category {
        Category::Sales => &SALES,
        Category::Marketing => &MARKETING,
        Category::Partnership => &PARTNERSHIP,
        Category::Introduction => &INTRODUCTION,
        Category::Followup => &FOLLOWUP,
    }
}

/// A bundled quick-pick template, ready for insertion as-is.
pub fn quick_pick(pick: QuickPick) -> Template {
    let (subject, content) = match pick {
        QuickPick::ColdOutreach => (
            "Quick question about {{company}}",
            "Hi {{first_name}},\n\nI noticed that {{company}} is making waves in the {{industry}} industry, and I wanted to reach out.\n\nI help companies like yours improve their outreach and lead generation processes. Would you be open to a quick chat about how we could potentially help {{company}} achieve similar results?\n\nBest regards,\n[Your name]",
        ),
        QuickPick::FollowUp => (
            "Following up on our previous conversation",
            "Hi {{first_name}},\n\nI wanted to follow up on my previous email. I understand you're probably busy, but I'd love to hear your thoughts on how we could help {{company}} improve its outreach efforts.\n\nWould you be open to a brief 15-minute call this week?\n\nBest regards,\n[Your name]",
        ),
        QuickPick::Introduction => (
            "Introduction from a fellow {{industry}} professional",
            "Hi {{first_name}},\n\nI hope this email finds you well. I'm reaching out because I noticed your work at {{company}} in the {{industry}} space.\n\nI'd love to connect and learn more about your experience in the industry. Would you be open to a brief conversation?\n\nBest regards,\n[Your name]",
        ),
    };
    Template::new(subject, content)
}
