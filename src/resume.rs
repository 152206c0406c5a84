// Resume document model and the HTML fragments rendered from it.
//
// Parsing and templating are platform-free; `loader` handles fetch and DOM
// injection.

use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, thiserror::Error)]
pub enum ResumeError {
    #[error("resume request failed with HTTP {0}")]
    Status(u16),
    #[error("invalid resume JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub skills: Skills,
    pub experience: Option<Vec<Job>>,
    pub achievements: Option<Vec<Achievement>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub product: Option<Vec<String>>,
    pub technical: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    pub level: u32,
    pub title: String,
    pub subtitle: Option<String>,
    pub company: String,
    pub dates: String,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub value: String,
    pub label: String,
}

pub const PRODUCT_SKILLS_ID: &str = "product-skills";
pub const TECHNICAL_SKILLS_ID: &str = "technical-skills";
pub const TIMELINE_ID: &str = "career-timeline";
pub const SCOREBOARD_ID: &str = "achievements-board";

impl Resume {
    pub fn from_json(text: &str) -> Result<Self, ResumeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Container id and rendered markup for every section present in the
    /// document. An absent key yields no entry, so the page keeps its static
    /// fallback; a present but empty list yields empty markup and clears it.
    pub fn sections(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(4);
        if let Some(product) = &self.skills.product {
            out.push((PRODUCT_SKILLS_ID, skills_html(product)));
        }
        if let Some(technical) = &self.skills.technical {
            out.push((TECHNICAL_SKILLS_ID, skills_html(technical)));
        }
        if let Some(experience) = &self.experience {
            out.push((TIMELINE_ID, timeline_html(experience)));
        }
        if let Some(achievements) = &self.achievements {
            out.push((SCOREBOARD_ID, scoreboard_html(achievements)));
        }
        out
    }

    pub fn job_count(&self) -> usize {
        self.experience.as_ref().map_or(0, Vec::len)
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.as_ref().map_or(0, Vec::len)
    }
}

/// Escape text for use inside element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn powerup_html(skill: &str) -> String {
    format!(
        "<div class=\"powerup\" role=\"listitem\">{}</div>",
        escape_html(skill)
    )
}

pub fn skills_html(skills: &[String]) -> String {
    skills.iter().map(|s| powerup_html(s)).collect()
}

pub fn level_card_html(job: &Job) -> String {
    let subtitle = job
        .subtitle
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!(", {}", escape_html(s)))
        .unwrap_or_default();
    let mut highlights = String::new();
    for h in &job.highlights {
        _ = write!(highlights, "<li>{}</li>", escape_html(h));
    }
    format!(
        "<article class=\"level-card\" tabindex=\"0\" role=\"button\" aria-expanded=\"false\">\
<div class=\"level-header\">\
<span class=\"level-number\">LVL {level}</span>\
<h3 class=\"level-title\">{title}{subtitle}</h3>\
<span class=\"level-company\">{company}</span>\
<span class=\"level-dates\">{dates}</span>\
</div>\
<div class=\"level-details\"><ul>{highlights}</ul></div>\
<p class=\"expand-hint\">[ CLICK TO EXPAND ]</p>\
</article>",
        level = job.level,
        title = escape_html(&job.title),
        subtitle = subtitle,
        company = escape_html(&job.company),
        dates = escape_html(&job.dates),
        highlights = highlights,
    )
}

pub fn timeline_html(experience: &[Job]) -> String {
    experience.iter().map(level_card_html).collect()
}

/// One high-score row; `rank` is 1-based.
pub fn score_entry_html(achievement: &Achievement, rank: usize) -> String {
    format!(
        "<div class=\"score-entry\" role=\"listitem\">\
<span class=\"score-rank\">{rank}.</span>\
<span class=\"score-value\">{}</span>\
<span class=\"score-label\">{}</span>\
</div>",
        escape_html(&achievement.value),
        escape_html(&achievement.label),
    )
}

pub fn scoreboard_html(achievements: &[Achievement]) -> String {
    achievements
        .iter()
        .enumerate()
        .map(|(i, a)| score_entry_html(a, i + 1))
        .collect()
}
