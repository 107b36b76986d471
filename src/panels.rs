// Static overlay content, rendered to HTML strings. Kept free of `web_sys`
// so host tests can include it.

use room_core::Panel;

pub struct Section {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// `(label, text)`; an empty label renders a plain bullet.
    pub items: &'static [(&'static str, &'static str)],
    pub highlight: Option<&'static str>,
}

pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub bio: &'static str,
}

pub struct Link {
    pub label: &'static str,
    /// `None` renders a disabled entry.
    pub href: Option<&'static str>,
}

const QUOTE: &str = "When systems are built to hide, you need one built to see.";

const DOC_SECTIONS: &[Section] = &[
    Section {
        title: "Why Pryv AI Exists",
        paragraphs: &[
            "We live in a world where free access to information is no longer real. It's filtered, ranked, restricted, or erased.",
            "Search engines feed you curated results. AI refuses \"sensitive\" questions. Social media shapes your feed \"for your safety.\"",
        ],
        items: &[],
        highlight: Some("But sometimes, you're not looking for safe answers. You're looking for truth."),
    },
    Section {
        title: "What Pryv AI Does",
        paragraphs: &[
            "Pryv AI is an AI-powered system that handles complex queries, pulling from multiple layers of the web:",
            "It stores nothing. It logs nothing. Every session is temporary, encrypted and anonymized.",
        ],
        items: &[
            ("Surface Web", "The public internet"),
            ("Deep Web", "Unindexed pages & databases"),
            ("Dark Web", "Built-in Tor, I2P and Freenet access"),
        ],
        highlight: None,
    },
    Section {
        title: "How the System Works",
        paragraphs: &["Pryv AI is built on three main blocks:"],
        items: &[
            ("AI Core", "Handles natural language queries, locally or in a distributed network."),
            ("Access Layer", "Reaches .onion services, I2P forums and anonymous live feeds."),
            ("Privacy Engine", "Encrypted containers, random routing, zero-trace execution."),
        ],
        highlight: None,
    },
    Section {
        title: "Legal & Ethical Frame",
        paragraphs: &["Running Pryv AI is legal. What you do with it depends on where you are and what you access."],
        items: &[],
        highlight: Some("The system doesn't make moral choices. It responds. You're the only conscience in the loop."),
    },
];

const AGENT_SECTIONS: &[Section] = &[
    Section {
        title: "The Built-in AI Agent",
        paragraphs: &[
            "On the Pryv site, you get a fully operational AI interface. Not a demo bot, but a live node in the system.",
            "The agent routes your queries through anonymous networks, then synthesizes answers via a private engine.",
        ],
        items: &[],
        highlight: Some("It doesn't track you. It doesn't know you. It doesn't ask why you're asking."),
    },
    Section {
        title: "What You Can Ask",
        paragraphs: &["The agent handles complex queries across multiple layers:"],
        items: &[
            ("Surface Web", "Public internet analysis and monitoring"),
            ("Deep Web", "Unindexed pages, databases and hidden content"),
            ("Threat Intelligence", "Ransomware networks, exploit forums, black markets"),
        ],
        highlight: None,
    },
    Section {
        title: "Privacy & Anonymity",
        paragraphs: &["Every session is temporary, encrypted and anonymized."],
        items: &[],
        highlight: Some("No accounts. No central servers. You're in full control."),
    },
];

const AGENT_APP_URL: &str = "https://app.blackmirroros.xyz/";

const TEAM: &[Member] = &[
    Member {
        name: "Dave Hatkins",
        role: "Chief Marketing Officer (CMO)",
        avatar: "public/davehatkins.jpg",
        bio: "Leads the project's global outreach strategy after a decade in digital marketing and blockchain branding.",
    },
    Member {
        name: "0xNira",
        role: "Lead Smart Contract Engineer",
        avatar: "public/0xnira.jpg",
        bio: "Specializes in secure contract architecture and gas-efficient infrastructure.",
    },
    Member {
        name: "0xKade",
        role: "Blockchain Protocol Developer",
        avatar: "public/0xkade.jpg",
        bio: "Works on L2 integrations and protocol scalability.",
    },
    Member {
        name: "Tyler Brooks",
        role: "Head of Community & Partnerships",
        avatar: "public/tylerbrooks.jpg",
        bio: "Forges partnerships and grows engaged user communities.",
    },
];

const DISTRIBUTION: &[(&str, &str, &str)] = &[
    ("90%", "Liquidity Pool", "Initial liquidity for trading on Solana"),
    ("10%", "Team", "Linear unlock over 6 months"),
];

const ECONOMICS: &[Section] = &[Section {
    title: "Economic Model",
    paragraphs: &[],
    items: &[
        ("Treasury Fund", "Project development, marketing and operational expenses"),
        ("Vesting Schedule", "Team tokens locked with linear release over 6 months"),
    ],
    highlight: None,
}];

const SOCIAL: &[Link] = &[
    Link {
        label: "X (Twitter)",
        href: Some("https://x.com/BlackMirrorOS"),
    },
    Link {
        label: "Discord - Coming Soon",
        href: None,
    },
    Link {
        label: "Medium",
        href: Some("https://medium.com/@blackmirroros"),
    },
    Link {
        label: "Telegram",
        href: Some("https://t.me/blackmirroros"),
    },
];

/// Options offered by the papers selection panel, in display order.
pub const SELECTION_OPTIONS: &[(Panel, &str, &str)] = &[
    (Panel::Documentation, "Documentation", "System documentation and technical specifications"),
    (Panel::Team, "Team", "Team information and collaboration tools"),
    (Panel::Tokenomics, "Tokenomics", "Token distribution and economic model"),
];

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverse of `Panel::element_id`, used for `data-target` attributes.
pub fn panel_for_id(id: &str) -> Option<Panel> {
    Panel::ALL.iter().copied().find(|p| p.element_id() == id)
}

/// Inner HTML for a panel. Every panel carries exactly one close button;
/// paper panels also carry the left/right arrows of the navigation ring.
pub fn panel_markup(panel: Panel) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="menu-close-btn" role="button" aria-label="Close">&#x2715;</div>"#);
    if let Some((left, right)) = panel.neighbours() {
        html.push_str(&format!(
            r#"<div class="menu-nav-arrow nav-arrow-left" data-target="{}">&#x2039;</div><div class="menu-nav-arrow nav-arrow-right" data-target="{}">&#x203A;</div>"#,
            left.element_id(),
            right.element_id()
        ));
    }
    match panel {
        Panel::Documentation => {
            push_header(&mut html, "Pryv AI", "Operator Manual", Some(QUOTE));
            push_sections(&mut html, DOC_SECTIONS);
        }
        Panel::Agent => {
            push_header(&mut html, "Pryv AI Agent", "Live Node Interface", Some(QUOTE));
            push_sections(&mut html, AGENT_SECTIONS);
            html.push_str(&format!(
                r#"<div class="section agent-access"><a id="agent-button" href="{}" target="_blank" rel="noopener">Connect to Pryv AI</a></div>"#,
                AGENT_APP_URL
            ));
        }
        Panel::Team => {
            push_header(&mut html, "Pryv AI Team", "Development & Operations", None);
            html.push_str(r#"<div class="team-members">"#);
            for m in TEAM {
                html.push_str(&format!(
                    r#"<div class="member-card"><img src="{}" alt="{}" class="member-avatar"><h3 class="member-name">{}</h3><h4 class="member-title">{}</h4><p class="member-bio">{}</p></div>"#,
                    m.avatar,
                    escape_html(m.name),
                    escape_html(m.name),
                    escape_html(m.role),
                    escape_html(m.bio)
                ));
            }
            html.push_str("</div>");
        }
        Panel::Tokenomics => {
            push_header(&mut html, "Pryv AI Tokenomics", "$PRYV Token Distribution & Economic Model", None);
            html.push_str(r#"<div class="distribution-grid">"#);
            for (pct, label, desc) in DISTRIBUTION {
                html.push_str(&format!(
                    r#"<div class="distribution-item"><div class="distribution-percentage">{}</div><div class="distribution-label">{}</div><div class="distribution-description">{}</div></div>"#,
                    escape_html(pct),
                    escape_html(label),
                    escape_html(desc)
                ));
            }
            html.push_str("</div>");
            push_sections(&mut html, ECONOMICS);
        }
        Panel::Typewriter => {
            push_header(&mut html, "Pryv AI LLM", "Initializing system...", None);
            html.push_str(r#"<div id="typewriter-content" class="typewriter-content"></div>"#);
        }
        Panel::Social => {
            push_header(&mut html, "Pryv AI", "Social Networks", None);
            html.push_str(r#"<div class="social-links">"#);
            for link in SOCIAL {
                match link.href {
                    Some(href) => html.push_str(&format!(
                        r#"<a href="{}" target="_blank" rel="noopener" class="social-link"><span class="social-name">{}</span></a>"#,
                        href,
                        escape_html(link.label)
                    )),
                    None => html.push_str(&format!(
                        r#"<div class="social-link disabled"><span class="social-name">{}</span></div>"#,
                        escape_html(link.label)
                    )),
                }
            }
            html.push_str("</div>");
        }
        Panel::Selection => {
            push_header(&mut html, "Pryv AI", "Choose your access level", None);
            html.push_str(r#"<div class="selection-options">"#);
            for (target, title, desc) in SELECTION_OPTIONS {
                html.push_str(&format!(
                    r#"<div class="option-card selection-option" data-target="{}"><h3 class="option-title">{}</h3><p class="option-description">{}</p></div>"#,
                    target.element_id(),
                    escape_html(title),
                    escape_html(desc)
                ));
            }
            html.push_str("</div>");
        }
    }
    html
}

fn push_header(html: &mut String, title: &str, subtitle: &str, quote: Option<&str>) {
    html.push_str(&format!(
        r#"<div class="newspaper-header"><h1 class="newspaper-title">{}</h1><div class="newspaper-subtitle">{}</div>"#,
        escape_html(title),
        escape_html(subtitle)
    ));
    if let Some(q) = quote {
        html.push_str(&format!(r#"<div class="quote">"{}"</div>"#, escape_html(q)));
    }
    html.push_str("</div>");
}

fn push_sections(html: &mut String, sections: &[Section]) {
    html.push_str(r#"<div class="newspaper-content">"#);
    for s in sections {
        html.push_str(&format!(
            r#"<div class="section"><h2 class="section-title">{}</h2>"#,
            escape_html(s.title)
        ));
        for p in s.paragraphs {
            html.push_str(&format!(r#"<div class="section-text">{}</div>"#, escape_html(p)));
        }
        if !s.items.is_empty() {
            html.push_str(r#"<ul class="feature-list">"#);
            for (label, text) in s.items {
                if label.is_empty() {
                    html.push_str(&format!("<li>{}</li>", escape_html(text)));
                } else {
                    html.push_str(&format!(
                        "<li><strong>{}</strong>: {}</li>",
                        escape_html(label),
                        escape_html(text)
                    ));
                }
            }
            html.push_str("</ul>");
        }
        if let Some(h) = s.highlight {
            html.push_str(&format!(r#"<div class="highlight-box">{}</div>"#, escape_html(h)));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
}
