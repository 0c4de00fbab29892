//! Realist layouts: warnings, risk assessment, burnout analysis, market
//! reality check and the top-risk ranking.

use std::fmt::Write;

use careerwise_catalog::{CautionRecord, RiskLevel, RiskSummary, Viability};
use careerwise_core::Result;

use super::{first_sentence, join_first, risk_glyph};

const STRAIN_MARKERS: &[&str] = &["emotional", "stress", "mental"];

/// Cap for the bulleted list sections of the warnings layout.
const MAX_BULLETS: usize = 5;

pub fn warnings(caution: &CautionRecord) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "## ⚠️ Career Warnings for {}\n", caution.career_name)?;
    writeln!(
        out,
        "A **{} career** carries **{}** overall risk. Read the burnout and work-life balance sections before committing.\n",
        caution.category, caution.overall_risk
    )?;
    writeln!(out, "### Overall Risk Level: **{}**\n", caution.overall_risk)?;

    writeln!(out, "### Key Warnings:")?;
    for (i, warning) in caution.key_warnings.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, warning)?;
    }
    writeln!(out)?;

    writeln!(out, "### Market Challenges:")?;
    writeln!(out, "• **Saturation**: {}", caution.market_saturation.description)?;
    if let Some(evidence) = caution.market_saturation.evidence.first() {
        writeln!(out, "• **Evidence**: {}", evidence)?;
    }
    writeln!(out, "• **Competition**: {}", caution.competition_level.description)?;
    writeln!(
        out,
        "• **Entry Barriers**: {}\n",
        join_first(&caution.competition_level.entry_barriers, 3)
    )?;

    let balance = &caution.work_life_balance;
    writeln!(out, "### Work-Life Balance Concerns:")?;
    writeln!(out, "• **Typical Load**: {}", balance.description)?;
    writeln!(out, "• **Balance Level**: {} work-life balance", balance.level)?;
    if !balance.sacrifices.is_empty() {
        writeln!(out, "• **Required Sacrifices**: {}", join_first(&balance.sacrifices, 3))?;
    }
    writeln!(out)?;

    writeln!(out, "### Burnout Risks:")?;
    writeln!(out, "• **Risk Level**: {} burnout risk", caution.burnout_risk.level)?;
    writeln!(
        out,
        "• **Indicators**: {}\n",
        join_first(&caution.burnout_risk.indicators, 3)
    )?;

    writeln!(out, "### Financial Realities:")?;
    writeln!(out, "• **Risk Level**: {}", caution.financial_risks.level)?;
    if !caution.financial_risks.concerns.is_empty() {
        writeln!(out, "• **Concerns**: {}", join_first(&caution.financial_risks.concerns, 3))?;
    }
    writeln!(out)?;

    let future = &caution.future_viability;
    writeln!(out, "### Future Viability:")?;
    writeln!(out, "• **Outlook**: {}", future.outlook)?;
    writeln!(out, "• **Timeline**: {}", caution.job_displacement_risk.timeframe)?;
    if !future.influencing_factors.is_empty() {
        writeln!(out, "• **Key Factors**: {}", join_first(&future.influencing_factors, 2))?;
    }
    writeln!(out)?;

    bullet_section(&mut out, "Required Sacrifices", &caution.required_sacrifices, MAX_BULLETS)?;
    bullet_section(&mut out, "Industry Challenges", &caution.industry_challenges, MAX_BULLETS)?;
    bullet_section(&mut out, "Educational Concerns", &caution.educational_concerns, MAX_BULLETS)?;

    writeln!(out, "### Realistic Expectations:")?;
    for (i, expectation) in caution.realistic_expectations.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, expectation)?;
    }
    writeln!(out)?;

    if !caution.alternatives.is_empty() {
        writeln!(out, "### Alternative Options:")?;
        writeln!(
            out,
            "Consider these alternatives with potentially fewer challenges: {}\n",
            caution.alternatives.join(", ")
        )?;
    }

    write!(
        out,
        "**Remember**: While these challenges are real, many professionals successfully navigate them and find fulfilling careers. The key is being fully aware of the difficulties and preparing accordingly."
    )?;
    Ok(out)
}

pub fn risk_assessment(caution: &CautionRecord) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "## 📊 Risk Assessment for {}\n", caution.career_name)?;
    writeln!(out, "### Overall Risk Level: **{}**\n", caution.overall_risk)?;

    writeln!(out, "| Risk Category | Level | Key Concerns |")?;
    writeln!(out, "|---------------|-------|--------------|")?;
    let rows = [
        ("Market Saturation", caution.market_saturation.level, &caution.market_saturation.description),
        ("Burnout Risk", caution.burnout_risk.level, &caution.burnout_risk.description),
        ("Job Displacement", caution.job_displacement_risk.level, &caution.job_displacement_risk.description),
        ("Financial Risk", caution.financial_risks.level, &caution.financial_risks.description),
        ("Competition Level", caution.competition_level.level, &caution.competition_level.description),
    ];
    for (label, level, description) in rows {
        writeln!(out, "| {} | {} | {} |", label, level, first_sentence(description))?;
    }
    writeln!(out)?;

    writeln!(out, "### Critical Risk Factors:\n")?;
    let verdict = match caution.overall_risk {
        RiskLevel::VeryHigh => "**EXTREME CAUTION REQUIRED**: This career has multiple high-risk factors that could significantly impact your well-being and career success.",
        RiskLevel::High => "**HIGH RISK**: Several significant challenges require careful consideration and preparation.",
        RiskLevel::Medium => "**MODERATE RISK**: Manageable challenges with proper planning and support.",
        RiskLevel::Low => "**RELATIVE LOW RISK**: Fewer major obstacles but still requires realistic expectations.",
    };
    writeln!(out, "{} {}\n", risk_glyph(caution.overall_risk), verdict)?;

    writeln!(out, "### Evidence-Based Concerns:")?;
    for (i, warning) in caution.key_warnings.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, warning)?;
    }
    writeln!(out)?;

    writeln!(out, "### What to Expect:")?;
    for expectation in caution.realistic_expectations.iter().take(3) {
        writeln!(out, "• {}", expectation)?;
    }
    writeln!(out)?;

    writeln!(out, "### Mitigation Strategies:")?;
    writeln!(out, "• **Preparation**: Research thoroughly and speak with professionals in the field")?;
    writeln!(out, "• **Support System**: Build network of mentors and peers for guidance")?;
    writeln!(out, "• **Backup Plans**: Consider alternative career paths")?;
    writeln!(out, "• **Self-Care**: Develop strategies for managing stress and maintaining work-life balance")?;
    writeln!(out, "• **Financial Planning**: Understand and prepare for education costs and early career challenges\n")?;

    writeln!(out, "### Long-term Viability:")?;
    writeln!(out, "**Outlook**: {}", caution.future_viability.outlook)?;
    writeln!(out, "**Timeframe for Automation**: {}\n", caution.job_displacement_risk.timeframe)?;

    let summary = if caution.overall_risk == RiskLevel::Low {
        "has relatively fewer risks"
    } else {
        "requires significant commitment and preparation to overcome substantial challenges"
    };
    write!(
        out,
        "**Final Assessment**: This career {}. Success depends on realistic expectations and thorough preparation.",
        summary
    )?;
    Ok(out)
}

pub fn burnout_analysis(caution: &CautionRecord) -> Result<String> {
    let burnout = &caution.burnout_risk;
    let mut out = String::new();
    writeln!(out, "## 🔥 Burnout Analysis for {}\n", caution.career_name)?;
    writeln!(out, "### Burnout Risk Level: **{}**\n", burnout.level)?;
    writeln!(out, "### Risk Description:\n{}\n", burnout.description)?;

    writeln!(out, "### Key Burnout Indicators:")?;
    for (i, indicator) in burnout.indicators.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, indicator)?;
    }
    writeln!(out)?;

    writeln!(out, "### Contributing Factors:\n")?;
    let balance = &caution.work_life_balance;
    writeln!(out, "#### Work-Life Balance Impact:")?;
    writeln!(out, "• **Typical Load**: {}", balance.description)?;
    writeln!(out, "• **Balance Rating**: {}", balance.level)?;
    if !balance.sacrifices.is_empty() {
        writeln!(out, "• **Personal Sacrifices**: {}", join_first(&balance.sacrifices, 3))?;
    }
    writeln!(out)?;

    writeln!(out, "#### Emotional & Mental Strain:")?;
    let strains: Vec<&String> = caution
        .industry_challenges
        .iter()
        .filter(|c| {
            let lower = c.to_lowercase();
            STRAIN_MARKERS.iter().any(|m| lower.contains(m))
        })
        .collect();
    if strains.is_empty() {
        writeln!(out, "• High-pressure decision making")?;
        writeln!(out, "• Performance expectations")?;
        writeln!(out, "• Stakeholder management")?;
    } else {
        for strain in strains {
            writeln!(out, "• {}", strain)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "### Health Impact Assessment:\n")?;
    let (heading, lines) = health_impact(burnout.level);
    writeln!(out, "{} **{}**:", risk_glyph(burnout.level), heading)?;
    for line in lines {
        writeln!(out, "• {}", line)?;
    }
    writeln!(out)?;

    writeln!(out, "### Prevention Strategies:")?;
    writeln!(out, "• **Set Boundaries**: Establish clear work-life boundaries")?;
    writeln!(out, "• **Self-Care**: Regular exercise, adequate sleep, healthy eating")?;
    writeln!(out, "• **Support Network**: Mentors, colleagues, and personal relationships")?;
    writeln!(out, "• **Professional Help**: Counseling when needed")?;
    writeln!(out, "• **Regular Breaks**: Time off to recharge and prevent exhaustion\n")?;

    writeln!(out, "### Industry Burnout Statistics:")?;
    for line in burnout_statistics(&caution.career_id) {
        writeln!(out, "• {}", line)?;
    }
    writeln!(out)?;

    write!(
        out,
        "**Important**: Burnout is preventable with proper self-care, organizational support, and realistic expectations. Regular monitoring of your well-being is crucial for long-term career success."
    )?;
    Ok(out)
}

pub fn market_reality(caution: &CautionRecord) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "## 📈 Market Reality Check for {}\n", caution.career_name)?;

    let saturation = &caution.market_saturation;
    writeln!(out, "### Market Saturation: **{}**", saturation.level)?;
    writeln!(out, "{}\n", saturation.description)?;
    writeln!(out, "**Evidence**: {}\n", saturation.evidence.join("; "))?;

    let competition = &caution.competition_level;
    writeln!(out, "### Competition Level: **{}**", competition.level)?;
    writeln!(out, "{}\n", competition.description)?;

    writeln!(out, "### Entry Barriers:")?;
    for (i, barrier) in competition.entry_barriers.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, barrier)?;
    }
    writeln!(out)?;

    let displacement = &caution.job_displacement_risk;
    writeln!(out, "### Job Displacement Risk: **{}**", displacement.level)?;
    writeln!(out, "{}\n", displacement.description)?;
    writeln!(out, "**Timeline**: {}\n", displacement.timeframe)?;

    let future = &caution.future_viability;
    writeln!(out, "### Future Viability: **{}**", future.outlook)?;
    writeln!(out, "{}\n", future.description)?;
    if !future.influencing_factors.is_empty() {
        writeln!(out, "### Key Influencing Factors:")?;
        for (i, factor) in future.influencing_factors.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, factor)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "### Geographic Considerations:")?;
    if caution.geographic_limitations.is_empty() {
        writeln!(out, "• Opportunities available across urban and rural areas")?;
        writeln!(out, "• Remote work options may be available")?;
    } else {
        for (i, limitation) in caution.geographic_limitations.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, limitation)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "### Realistic Job Search Expectations:")?;
    for line in job_search(competition.level) {
        writeln!(out, "• {}", line)?;
    }
    writeln!(out)?;

    writeln!(out, "### Market Demand Outlook:")?;
    writeln!(out, "{}", outlook_line(future.outlook))?;

    writeln!(out, "\n### Preparation Recommendations:")?;
    writeln!(out, "• **Skill Development**: Focus on high-demand, transferable skills")?;
    writeln!(out, "• **Networking**: Build professional connections early")?;
    writeln!(out, "• **Experience**: Gain practical experience through internships/projects")?;
    writeln!(out, "• **Location Planning**: Consider relocation for better opportunities")?;
    writeln!(out, "• **Backup Planning**: Prepare alternative career paths\n")?;

    write!(
        out,
        "**Market Reality**: This field requires realistic expectations about competition levels and job search challenges. Success depends on thorough preparation, persistence, and adaptability to market conditions."
    )?;
    Ok(out)
}

pub fn top_risks(risks: &[RiskSummary]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "## 🚨 Top Career Risks\n")?;
    writeln!(
        out,
        "These are the riskiest career choices I track, ranked by overall risk with their key risk factors:\n"
    )?;

    for (i, risk) in risks.iter().enumerate() {
        writeln!(
            out,
            "### {}. {} - {} {} Risk\n",
            i + 1,
            risk.career_name,
            risk_glyph(risk.overall_risk),
            risk.overall_risk
        )?;
        writeln!(out, "**Key Risk Factors:**")?;
        for (j, factor) in risk.factors.iter().enumerate() {
            writeln!(out, "{}. {}", j + 1, factor)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "### Risk Assessment Framework:\n")?;
    for level in [RiskLevel::VeryHigh, RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
        writeln!(out, "**{} Risk ({})**: {}", level, risk_glyph(level), framework_note(level))?;
    }
    writeln!(out)?;

    writeln!(out, "### Important Considerations:\n")?;
    writeln!(out, "1. **Personal Factors**: Your individual circumstances, skills, and preferences matter")?;
    writeln!(out, "2. **Preparation**: Many risks can be mitigated with proper preparation and support")?;
    writeln!(out, "3. **Market Changes**: Career landscapes can change with technology and economic shifts")?;
    writeln!(out, "4. **Individual Success**: Success depends on personal commitment and adaptability")?;
    writeln!(out, "5. **Alternative Paths**: Keep a backup plan in a related career with a lower risk profile\n")?;

    write!(
        out,
        "**Remember**: Higher risk doesn't mean \"don't pursue\" - it means \"be fully aware and prepared\". Many people successfully navigate challenging careers and find great fulfillment. The key is informed decision-making and realistic expectations."
    )?;
    Ok(out)
}

fn bullet_section(out: &mut String, title: &str, items: &[String], limit: usize) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "### {}:", title)?;
    for item in items.iter().take(limit) {
        writeln!(out, "• {}", item)?;
    }
    writeln!(out)?;
    Ok(())
}

fn health_impact(level: RiskLevel) -> (&'static str, [&'static str; 4]) {
    match level {
        RiskLevel::VeryHigh => (
            "CRITICAL HEALTH CONCERNS",
            [
                "**Physical Health**: Chronic fatigue, sleep disorders, weakened immunity",
                "**Mental Health**: Anxiety, depression, emotional exhaustion",
                "**Relationships**: Strained personal relationships, social isolation",
                "**Long-term**: Higher risk of serious health conditions",
            ],
        ),
        RiskLevel::High => (
            "SIGNIFICANT HEALTH RISKS",
            [
                "**Physical Health**: Regular fatigue, disrupted sleep patterns",
                "**Mental Health**: Increased stress, occasional anxiety",
                "**Relationships**: Less time for personal connections",
                "**Long-term**: Potential for chronic health issues if unmanaged",
            ],
        ),
        RiskLevel::Medium => (
            "MODERATE HEALTH IMPACT",
            [
                "**Physical Health**: Occasional fatigue during busy periods",
                "**Mental Health**: Manageable stress with proper work-life balance",
                "**Relationships**: Some impact during peak work periods",
                "**Long-term**: Generally manageable with healthy habits",
            ],
        ),
        RiskLevel::Low => (
            "LOW HEALTH IMPACT",
            [
                "**Physical Health**: Minimal physical strain",
                "**Mental Health**: Generally low stress levels",
                "**Relationships**: Good work-life balance typically maintained",
                "**Long-term**: Low risk of burnout-related health issues",
            ],
        ),
    }
}

fn burnout_statistics(career_id: &str) -> [&'static str; 3] {
    match career_id {
        "doctor-mbbs" => [
            "70% of doctors experience burnout within 5 years",
            "Average physician works 70-80 hours per week",
            "Higher suicide rates compared to general population",
        ],
        "nurse" => [
            "Highest burnout rates among healthcare professions, with nursing at the top",
            "30-50% of nurses leave within first 2 years",
            "Chronic sleep deprivation from shift work",
        ],
        "chartered-accountant" => [
            "Tax season burnout affects 80% of CAs",
            "Many switch careers after 5-7 years",
            "High correlation with mental health issues",
        ],
        _ => [
            "Industry burnout rates vary by role and organization",
            "Prevention programs can reduce burnout by 30-50%",
            "Early career burnout often leads to career changes",
        ],
    }
}

fn job_search(competition: RiskLevel) -> [&'static str; 4] {
    match competition {
        RiskLevel::VeryHigh => [
            "**Job Search Duration**: 6-12 months for entry-level positions",
            "**Application Volume**: Hundreds or thousands per position",
            "**Success Rate**: Less than 5% for competitive roles",
            "**Strategy Required**: Strong portfolio/networking essential",
        ],
        RiskLevel::High => [
            "**Job Search Duration**: 3-6 months for most positions",
            "**Application Volume**: Tens to hundreds per position",
            "**Success Rate**: 10-20% with proper qualifications",
            "**Strategy Required**: Relevant experience and skills important",
        ],
        RiskLevel::Medium => [
            "**Job Search Duration**: 1-3 months for qualified candidates",
            "**Application Volume**: Reasonable number of applicants",
            "**Success Rate**: 25-50% with standard qualifications",
            "**Strategy Required**: Basic qualifications usually sufficient",
        ],
        RiskLevel::Low => [
            "**Job Search Duration**: 1 month or less for qualified candidates",
            "**Application Volume**: Limited competition",
            "**Success Rate**: 50%+ for qualified candidates",
            "**Strategy Required**: Standard application process",
        ],
    }
}

fn outlook_line(outlook: Viability) -> &'static str {
    match outlook {
        Viability::Growing => "📈 **POSITIVE OUTLOOK**: Growing demand expected in coming years",
        Viability::Stable => "📊 **STABLE OUTLOOK**: Consistent demand with moderate changes expected",
        Viability::Declining => "📉 **DECLINING OUTLOOK**: Reduced demand, may require career transition",
        Viability::Uncertain => "❓ **UNCERTAIN OUTLOOK**: Market conditions unpredictable, monitor closely",
    }
}

fn framework_note(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::VeryHigh => "Extreme caution required - multiple severe challenges",
        RiskLevel::High => "Significant challenges requiring careful preparation",
        RiskLevel::Medium => "Manageable with proper planning and support",
        RiskLevel::Low => "Relatively fewer major obstacles",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerwise_catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_doctor_warnings_content() {
        let catalog = catalog();
        let doctor = catalog.caution_by_id("doctor-mbbs").unwrap();
        let text = warnings(doctor).unwrap();
        for needle in ["Medical career", "NEET", "burnout", "work-life balance", "educational debt"] {
            assert!(text.contains(needle), "missing {:?}", needle);
        }
    }

    fn bullets_under(text: &str, heading: &str) -> usize {
        text.lines()
            .skip_while(|l| *l != heading)
            .skip(1)
            .take_while(|l| l.starts_with("• "))
            .count()
    }

    #[test]
    fn test_warning_lists_capped_at_five() {
        let catalog = catalog();
        let doctor = catalog.caution_by_id("doctor-mbbs").unwrap();
        assert!(doctor.industry_challenges.len() > MAX_BULLETS);
        let text = warnings(doctor).unwrap();
        assert_eq!(bullets_under(&text, "### Industry Challenges:"), MAX_BULLETS);
        assert!(!text.contains(doctor.industry_challenges[MAX_BULLETS].as_str()));
        assert!(bullets_under(&text, "### Required Sacrifices:") <= MAX_BULLETS);
        assert!(bullets_under(&text, "### Educational Concerns:") <= MAX_BULLETS);
    }

    #[test]
    fn test_risk_assessment_table() {
        let catalog = catalog();
        let caution = catalog.caution_by_id("software-engineer").unwrap();
        let text = risk_assessment(caution).unwrap();
        assert!(text.contains("Risk Assessment for Software Engineer"));
        assert_eq!(text.lines().filter(|l| l.starts_with("| ") && !l.starts_with("| Risk")).count(), 5);
        assert!(text.contains("realistic"));
        assert!(text.contains("expectations"));
    }

    #[test]
    fn test_burnout_statistics_per_career() {
        let catalog = catalog();
        let nurse = burnout_analysis(catalog.caution_by_id("nurse").unwrap()).unwrap();
        assert!(nurse.contains("Burnout Analysis"));
        assert!(nurse.contains("nursing"));
        assert!(nurse.contains("CRITICAL HEALTH CONCERNS"));

        let teacher = burnout_analysis(catalog.caution_by_id("teacher").unwrap()).unwrap();
        assert!(teacher.contains("Industry burnout rates vary"));
    }

    #[test]
    fn test_strain_list_ignores_plain_burnout_mentions() {
        let catalog = catalog();
        let mut caution = catalog.caution_by_id("teacher").unwrap().clone();
        caution.industry_challenges = vec!["Burnout after the first decade".into()];
        let text = burnout_analysis(&caution).unwrap();
        assert!(text.contains("• High-pressure decision making"));
        assert!(!text.contains("• Burnout after the first decade"));

        caution.industry_challenges.push("Emotional toll of large classes".into());
        let text = burnout_analysis(&caution).unwrap();
        assert!(text.contains("• Emotional toll of large classes"));
        assert!(!text.contains("• High-pressure decision making"));
    }

    #[test]
    fn test_market_reality_outlook() {
        let catalog = catalog();
        let text = market_reality(catalog.caution_by_id("journalist").unwrap()).unwrap();
        assert!(text.contains("Market Reality Check"));
        assert!(text.contains("journalism"));
        assert!(text.contains("DECLINING OUTLOOK"));
        assert!(text.contains("Less than 5%"));
    }

    #[test]
    fn test_top_risks_layout() {
        let catalog = catalog();
        let text = top_risks(&catalog.top_risks(5)).unwrap();
        for needle in ["Top Career Risks", "riskiest", "factors", "preparation", "backup"] {
            assert!(text.contains(needle), "missing {:?}", needle);
        }
        assert!(text.contains("### 5. "));
        assert!(!text.contains("### 6. "));
    }
}
