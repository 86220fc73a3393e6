//! Static page content.

pub struct HeroSlide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct Review {
    pub image: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
}

pub struct Video {
    pub video_id: &'static str,
    pub tagline: &'static str,
}

pub struct Step {
    pub image: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
}

/// One comparison tab: rows of `[feature, competitor, brace]`.
pub struct Comparison {
    pub name: &'static str,
    pub rows: [[&'static str; 3]; 6],
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

macro_rules! cdn {
    ($file:literal) => {
        concat!("https://cdn.shopify.com/s/files/1/0425/6173/2773/files/", $file)
    };
}

pub(crate) use cdn;

pub static HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        image: cdn!("Freedom-Leg-Hand-Holding-Photo.jpg"),
        title: "Keep on Living. Ditch the Crutches.",
        subtitle: "100% non-weightbearing support for your injured leg",
    },
    HeroSlide {
        image: cdn!("Freedom-Leg-Lifting-up.jpg"),
        title: "Walk Hands-Free During Recovery",
        subtitle: "Takes 100% of weight off your injured leg",
    },
    HeroSlide {
        image: cdn!("Walking-Daughter-587818.jpg"),
        title: "Regain Your Freedom",
        subtitle: "Crutch-free mobility with full weight support",
    },
];

pub const PRICE: &str = "$395";
pub const MONTHLY_PRICE: &str = "$66/mo";
pub const PRICING_PERKS: [&str; 3] = ["HSA/FSA Accepted", "Insurance Eligible", "30-Day Guarantee"];

pub static REVIEWS: [Review; 3] = [
    Review {
        image: cdn!("Customer_review_photo_Lee_Partyka.jpg"),
        quote: "This is the best thing ever if you have to have a no weight bearing restrictions like I have for eight weeks. This should be a standard offering after surgery, even my orthopedic doctor was impressed",
        author: "Lee Partyka — Bunion surgery",
    },
    Review {
        image: cdn!("Customer_review_photo_Jeff_higgins.jpg"),
        quote: "Freedom Leg Rocks! I am 4 weeks non-weight bearing following Achilles surgery last week. I use the Freedom Leg to get up and down stairs at home and use it for walks of up to a mile each day. I am very pleased with the product, it is well engineered, the components are very good and highly adjustable.",
        author: "Jeff Higgins — Achilles surgery",
    },
    Review {
        image: cdn!("image-2.png"),
        quote: "The Freedom Leg has helped me stay on my job as a gymnastics coach. That would have been impossible with crutches and my knee couldn't take the pressure of a knee walker or iWalkfree.",
        author: "Patty Steele — Knee surgery",
    },
];

pub static VIDEOS: [Video; 3] = [
    Video {
        video_id: "rM1DegIynKM",
        tagline: "See What Doctors Are Saying",
    },
    Video {
        video_id: "ZKAAO9KCbYU",
        tagline: "Christy Regains Her Freedom",
    },
    Video {
        video_id: "TrF_XIClYBc",
        tagline: "Bode's Recovery",
    },
];

pub static STEPS: [Step; 4] = [
    Step {
        image: cdn!("Freedom_Leg_3_How_it_Works.jpg"),
        label: "How it Works",
        description: "The Freedom Leg transfers weight from your injured leg to your healthy leg through a knee pad system.",
        short_description: "Transfers weight from injured leg to healthy leg through knee pad.",
    },
    Step {
        image: cdn!("fit_the_Freedom_Leg_1.png"),
        label: "Adjust and Attach",
        description: "Simply adjust the brace to your measurements and secure it with the easy-to-use straps.",
        short_description: "Adjust to your size and secure with easy straps.",
    },
    Step {
        image: cdn!("fit_the_Freedom_Leg_2.png"),
        label: "First Steps",
        description: "Take your first hands-free steps with confidence. The brace provides full weight support.",
        short_description: "Take hands-free steps with full weight support.",
    },
    Step {
        image: cdn!("Walking_in_Kitchen.png"),
        label: "Regain your Freedom",
        description: "Walk freely, climb stairs, and return to your daily activities without crutches.",
        short_description: "Walk freely and return to daily activities.",
    },
];

pub static COMPARISONS: [Comparison; 3] = [
    Comparison {
        name: "Crutches",
        rows: [
            ["Hands Free", "No", "Yes"],
            ["Stairs", "Difficult", "Easy"],
            ["Learning Curve", "Moderate", "Minimal"],
            ["Upper Body Strain", "High", "None"],
            ["Indoor Use", "Good", "Excellent"],
            ["Outdoor Use", "Limited", "All terrain"],
        ],
    },
    Comparison {
        name: "Knee Walker",
        rows: [
            ["Hands Free", "Yes", "Yes"],
            ["Stairs", "Impossible", "Easy"],
            ["Portability", "Bulky", "Compact"],
            ["Tight Spaces", "Difficult", "Easy"],
            ["Indoor Use", "Good", "Excellent"],
            ["Outdoor Use", "Limited", "All terrain"],
        ],
    },
    Comparison {
        name: "iWalk",
        rows: [
            ["Hands Free", "Yes", "Yes"],
            ["Stairs", "Moderate", "Easy"],
            ["Knee Pressure", "High", "Low"],
            ["Balance", "High", "Moderate"],
            ["Weight Dist.", "Knee only", "Thigh"],
            ["Comfort", "Painful", "Comfortable"],
        ],
    },
];

pub static QUIZ_INJURIES: [&str; 6] = [
    "Foot or Ankle Fracture",
    "Achilles Tendon Injury",
    "Knee Surgery or Injury",
    "Lower Leg Fracture",
    "Foot Surgery",
    "Other Lower Extremity Injury",
];

pub static FAQS: [Faq; 4] = [
    Faq {
        question: "💰 Pricing & Financing",
        answer: "$395 — Insurance code L2136 • HSA/FSA eligible\n\n✓ 0% financing — Just $66/month for 6 months\n✓ 30-day money-back guarantee\n✓ Free 2-3 day delivery (ships same day)\n✓ Eligible for insurance reimbursement (code L2136)\n\nThat's less than $6/day during your recovery",
    },
    Faq {
        question: "💳 Insurance & HSA/FSA",
        answer: "Eligible for insurance reimbursement. Call your insurance (number on card) and ask about coverage for code L2136. We accept FSA/HSA cards directly. Most patients purchase first, then submit our invoice for reimbursement—the quickest way to get reimbursed.",
    },
    Faq {
        question: "📦 Return Policy",
        answer: "30-day trial period. Return in good condition for a full refund. Ship to: 6776 Townsend Rd, Lot 199, Jacksonville, FL 32244. Include name used for order. Brace must be free of animal hair and undamaged.",
    },
    Faq {
        question: "🚚 Shipping",
        answer: "USA: Free 2-3 day delivery. Ships same day if ordered before 2pm EST. Expedited: $50\nCanada: Standard $20, Expedited $60\nInternational: Worldwide shipping available. Price calculated at checkout (duties may apply).",
    },
];

pub const FAQ_PAGE_URL: &str = "https://www.freedomleg.com/pages/frequently-asked-questions";
