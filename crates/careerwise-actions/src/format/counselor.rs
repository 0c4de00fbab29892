//! Counselor layouts: recommendations, details, comparison and category
//! listings.

use std::fmt::Write;

use careerwise_catalog::{CareerRecord, Category, Stream};
use careerwise_core::Result;

use super::{join_first, rupees, truncate, DEGREE_CELL_WIDTH};

/// Careers shown side by side in a comparison table.
pub const MAX_COMPARED: usize = 3;

pub fn recommendations(
    careers: &[&CareerRecord],
    streams: &[Stream],
    interests: &[&str],
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Based on your profile, here are some career recommendations:")?;
    if !streams.is_empty() || !interests.is_empty() {
        let mut basis: Vec<String> = streams.iter().map(|s| format!("{} stream", s)).collect();
        basis.extend(interests.iter().map(|i| i.to_string()));
        writeln!(out, "_Matched on: {}_", basis.join(", "))?;
    }
    writeln!(out)?;

    for (i, career) in careers.iter().enumerate() {
        writeln!(out, "{}. **{}**", i + 1, career.name)?;
        writeln!(
            out,
            "   • Average Salary: {}/year (Entry), {}/year (Mid), {}/year (Senior)",
            rupees(career.salary.entry),
            rupees(career.salary.mid),
            rupees(career.salary.senior)
        )?;
        writeln!(out, "   • Work Environment: {}", career.lifestyle.work_environment)?;
        writeln!(out, "   • Work-Life Balance: {}", career.lifestyle.work_life_balance)?;
        writeln!(out, "   • Key Skills: {}", join_first(&career.skills, 3))?;
        writeln!(out)?;
    }

    write!(
        out,
        "Would you like detailed information about any of these careers? Just ask me \"Tell me about [career name]\" for more details!"
    )?;
    Ok(out)
}

pub fn details(career: &CareerRecord) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "## {}\n", career.name)?;
    writeln!(out, "**Description:** {}\n", career.description)?;

    writeln!(out, "### Salary Information")?;
    writeln!(out, "• Entry Level: {}/year", rupees(career.salary.entry))?;
    writeln!(out, "• Mid Level: {}/year", rupees(career.salary.mid))?;
    writeln!(out, "• Senior Level: {}/year\n", rupees(career.salary.senior))?;

    let life = &career.lifestyle;
    writeln!(out, "### Lifestyle & Work Environment")?;
    writeln!(out, "• Working Hours: {}", life.work_hours)?;
    writeln!(out, "• Work Environment: {}", life.work_environment)?;
    writeln!(out, "• Stress Level: {}", life.stress_level)?;
    writeln!(out, "• Work-Life Balance: {}", life.work_life_balance)?;
    writeln!(out, "• Travel Required: {}", if life.travel_required { "Yes" } else { "No" })?;
    writeln!(
        out,
        "• Remote Work: {}\n",
        if life.remote_work { "Available" } else { "Not typically available" }
    )?;

    let edu = &career.education;
    let streams: Vec<String> = edu.stream.iter().map(ToString::to_string).collect();
    writeln!(out, "### Education Requirements")?;
    writeln!(out, "• Degree: {}", edu.degree)?;
    writeln!(out, "• Suitable Streams: {}", streams.join(", "))?;
    if !edu.entrance_exams.is_empty() {
        writeln!(out, "• Entrance Exams: {}", edu.entrance_exams.join(", "))?;
    }
    writeln!(out, "• Duration: {}", edu.duration)?;
    if !edu.top_institutions.is_empty() {
        writeln!(out, "• Top Institutions: {}", join_first(&edu.top_institutions, 3))?;
    }
    writeln!(out)?;

    writeln!(out, "### Key Skills Required")?;
    for skill in &career.skills {
        writeln!(out, "• {}", skill)?;
    }
    writeln!(out)?;

    writeln!(out, "### Job Outlook\n• {}\n", career.job_outlook)?;

    writeln!(out, "### Pros")?;
    for pro in &career.pros {
        writeln!(out, "• {}", pro)?;
    }
    writeln!(out)?;

    writeln!(out, "### Cons")?;
    for con in &career.cons {
        writeln!(out, "• {}", con)?;
    }
    writeln!(out)?;

    writeln!(out, "### Alternative Career Options")?;
    write!(out, "{}", career.alternatives.join(", "))?;
    Ok(out)
}

/// Side-by-side table of up to [`MAX_COMPARED`] careers.
pub fn comparison(careers: &[&CareerRecord]) -> Result<String> {
    let careers = &careers[..careers.len().min(MAX_COMPARED)];
    let row = |f: fn(&CareerRecord) -> String| table_cells(careers, f);

    let mut out = String::new();
    writeln!(out, "## Career Comparison\n")?;
    writeln!(out, "Here is a side-by-side comparison of the careers you asked about.\n")?;
    writeln!(out, "| Aspect | {} |", row(|c| c.name.clone()))?;
    writeln!(out, "|--------|{}", "--------|".repeat(careers.len()))?;
    writeln!(out, "| **Entry Salary** | {} |", row(|c| rupees(c.salary.entry)))?;
    writeln!(out, "| **Mid Salary** | {} |", row(|c| rupees(c.salary.mid)))?;
    writeln!(out, "| **Senior Salary** | {} |", row(|c| rupees(c.salary.senior)))?;
    writeln!(
        out,
        "| **Degree** | {} |",
        row(|c| truncate(&c.education.degree, DEGREE_CELL_WIDTH))
    )?;
    writeln!(out, "| **Duration** | {} |", row(|c| c.education.duration.clone()))?;
    writeln!(out, "| **Work Hours** | {} |", row(|c| c.lifestyle.work_hours.clone()))?;
    writeln!(
        out,
        "| **Work-Life Balance** | {} |",
        row(|c| c.lifestyle.work_life_balance.to_string())
    )?;
    writeln!(
        out,
        "| **Stress Level** | {} |",
        row(|c| c.lifestyle.stress_level.to_string())
    )?;
    writeln!(out, "| **Job Outlook** | {} |", row(|c| c.job_outlook.to_string()))?;

    writeln!(out, "\n### Detailed Analysis:\n")?;
    for career in careers {
        writeln!(out, "**{}:**", career.name)?;
        writeln!(out, "• **Best For:** {}", career.suitable_for.join(", "))?;
        writeln!(out, "• **Top Skills:** {}", join_first(&career.skills, 3))?;
        if let Some(pro) = career.pros.first() {
            writeln!(out, "• **Key Advantage:** {}", pro)?;
        }
        writeln!(out)?;
    }
    Ok(out.trim_end().to_string())
}

fn table_cells(careers: &[&CareerRecord], cell: fn(&CareerRecord) -> String) -> String {
    careers
        .iter()
        .map(|c| cell(c))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn category_listing(category: Category, careers: &[&CareerRecord]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "## {} Career Options\n", category)?;
    writeln!(
        out,
        "Here are the {} careers available:\n",
        category.as_str().to_lowercase()
    )?;
    for (i, career) in careers.iter().enumerate() {
        writeln!(out, "{}. **{}**", i + 1, career.name)?;
        writeln!(out, "   • {}", career.description)?;
        writeln!(out, "   • Average Salary: {}/year", rupees(career.salary.entry))?;
        writeln!(out, "   • Education: {}\n", career.education.degree)?;
    }
    write!(
        out,
        "To get detailed information about any career, just ask me \"Tell me about [career name]\"!"
    )?;
    Ok(out)
}
