//! Single-dimensional analyses: one variable at a time
//!
//! Education level, years of coding, employment, country and US state, and
//! the focus-language usage split. Each subsection writes its narrative and
//! renders the corresponding charts.

use polars::prelude::DataFrame;

use crate::charts::{bar_chart, pie_chart};
use crate::config::ReportConfig;
use crate::data::{contains_counts, distinct_values, grouped_counts, GroupedCounts};
use crate::error::Result;
use crate::report::chart_style;
use crate::report::writer::ReportWriter;
use crate::schema;

pub fn single_dimensional_section(
    df: &DataFrame,
    config: &ReportConfig,
    writer: &mut ReportWriter,
) -> Result<()> {
    writer.heading(2, "Single-dimensional analysis");
    writer.paragraph("This section presents results focusing on one variable at a time.");

    education_levels(df, config, writer)?;
    years_code(df, config, writer)?;
    employment(df, config, writer)?;
    country(df, config, writer)?;
    languages(df, config, writer)?;
    Ok(())
}

fn education_levels(
    df: &DataFrame,
    config: &ReportConfig,
    writer: &mut ReportWriter,
) -> Result<()> {
    writer.heading(3, "Education level");

    let levels = distinct_values(df, schema::ED_LEVEL)?;
    writer.paragraph(&format!("There are {} levels in total:", levels.len()));
    writer.bullet_list(&levels);

    let counts = grouped_counts(df, schema::ED_LEVEL)?;
    let narrative = match counts.top_group() {
        Some((top, share)) => format!(
            "The charts below show the number of participants per level, followed
             by the percentage split in the pie chart. The largest group is
             \"{}\", corresponding to about {:.1}% of the total.",
            top, share
        ),
        None => "The charts below show the number of participants per level.".to_string(),
    };
    writer.paragraph(&narrative);
    if let Some(share) = counts.share(&config.sentinel) {
        writer.paragraph(&format!(
            "A small part of the participants either left this field blank or had
             a level different from the available options, totaling {:.1}%.",
            share
        ));
    }

    render_bar(writer, config, &counts, "education_levels", "Participants by education level", false)?;
    render_pie(writer, config, &counts, "education_levels", "Percentage of participants by education level")?;
    Ok(())
}

fn years_code(df: &DataFrame, config: &ReportConfig, writer: &mut ReportWriter) -> Result<()> {
    writer.heading(3, "Years of coding");

    writer.paragraph(
        "The chart below shows how long participants have been programming. Round
         numbers of years dominate, while participants with more than 40 years of
         practice are rare. It is still remarkable how many people who likely
         started before the internet era remain active on the site.",
    );
    let counts = grouped_counts(df, schema::YEARS_CODE)?;
    render_bar(writer, config, &counts, "years_code", "Participants by years of coding", true)?;

    writer.paragraph(
        "Considering only professional practice the picture stays similar, except
         that a large share of the participants did not provide this answer. Many
         may not be working professionally yet, the definition of \"professional\"
         may have been unclear, or the field was simply skipped. Excluding that
         group, most participants have less than 10 years of professional
         experience, with a small minority at the other extreme above 40 years.",
    );
    let counts_pro = grouped_counts(df, schema::YEARS_CODE_PRO)?;
    render_bar(writer, config, &counts_pro, "years_code_pro", "Participants by years of professional coding", true)?;
    Ok(())
}

fn employment(df: &DataFrame, config: &ReportConfig, writer: &mut ReportWriter) -> Result<()> {
    writer.heading(3, "Employment");

    let counts = grouped_counts(df, schema::EMPLOYMENT)?;
    let narrative = match counts.top_group() {
        Some((top, share)) => format!(
            "Most participants report \"{}\", at {:.1}% of the observations.
             Students form the next sizeable group, and the smallest categories
             can be loosely grouped as people programming as a hobby only.",
            top, share
        ),
        None => "Participants by type of employment.".to_string(),
    };
    writer.paragraph(&narrative);

    render_bar(writer, config, &counts, "employment", "Participants by type of employment", false)?;
    render_pie(writer, config, &counts, "employment", "Percentage of participants by type of employment")?;
    Ok(())
}

fn country(df: &DataFrame, config: &ReportConfig, writer: &mut ReportWriter) -> Result<()> {
    writer.heading(3, "Country");

    let counts = grouped_counts(df, schema::COUNTRY)?;
    writer.paragraph(&format!(
        "Determining the number of respondents per country can be tricky, given
         that a total of {} countries appear in the data. Still, the chart shows
         that most answers come from the United States, followed by India.",
        counts.len()
    ));
    render_bar(writer, config, &counts, "country", "Participants by country", true)?;

    writer.paragraph(
        "Focusing on the United States, the chart below shows the distribution of
         participants by state, excluding the entries without an answer - most
         likely people outside the US who skipped the question. California leads
         by a wide margin; the presence of Silicon Valley may relate to that
         number, though confirming any causal link would require another study.",
    );
    let mut state_counts = grouped_counts(df, schema::US_STATE)?;
    state_counts.remove_label(&config.sentinel);
    render_bar(writer, config, &state_counts, "us_state", "Participants by state in the United States", true)?;
    render_pie(writer, config, &state_counts, "us_state", "Percentage of participants by state in the United States")?;
    Ok(())
}

fn languages(df: &DataFrame, config: &ReportConfig, writer: &mut ReportWriter) -> Result<()> {
    writer.heading(3, "Programming languages");

    let language = &config.focus_language;
    let used = contains_counts(df, schema::USED_LANGUAGES, language)?;
    writer.paragraph(&format!(
        "Each participant lists the languages they have worked with, which makes a
         language-by-language analysis unwieldy. Concentrating on {}: as the chart
         below shows, {:.1}% of the participants work with it.",
        language,
        used.share_matching()
    ));
    let used_counts = GroupedCounts::from_pairs(
        schema::USED_LANGUAGES,
        vec![
            (language.clone(), used.matching),
            ("Other languages".to_string(), used.other),
        ],
    );
    render_pie(
        writer,
        config,
        &used_counts,
        "used_language",
        &format!("Participants who work with {}", language),
    )?;

    let desired = contains_counts(df, schema::DESIRED_LANGUAGES, language)?;
    writer.paragraph(&format!(
        "An interesting companion figure is the share of participants who would
         like to work with {} in the future: {:.1}%. Together with the previous
         result, this suggests the language will stay relevant.",
        language,
        desired.share_matching()
    ));
    let desired_counts = GroupedCounts::from_pairs(
        schema::DESIRED_LANGUAGES,
        vec![
            (language.clone(), desired.matching),
            ("Other languages".to_string(), desired.other),
        ],
    );
    render_pie(
        writer,
        config,
        &desired_counts,
        "desired_language",
        &format!("Participants who want to work with {}", language),
    )?;
    Ok(())
}

fn render_bar(
    writer: &mut ReportWriter,
    config: &ReportConfig,
    counts: &GroupedCounts,
    slug: &str,
    title: &str,
    small_labels: bool,
) -> Result<()> {
    let mut style = chart_style(config, counts.len());
    if small_labels {
        style = style.with_label_font(config.small_label_font);
    }
    let path = writer.next_chart_path(&format!("{}_bar", slug));
    bar_chart(&path, title, counts, &style)?;
    writer.image(title, &path);
    Ok(())
}

fn render_pie(
    writer: &mut ReportWriter,
    config: &ReportConfig,
    counts: &GroupedCounts,
    slug: &str,
    title: &str,
) -> Result<()> {
    let style = chart_style(config, counts.len());
    let path = writer.next_chart_path(&format!("{}_pie", slug));
    pie_chart(&path, title, counts, &style)?;
    writer.image(title, &path);
    Ok(())
}
