use std::fmt::Write;

use directory_core::{Record, ViewResult};

const HEADER: &str = "Meet Our Team";

/// Plain-text rendering of one directory page.
pub fn render(view: &ViewResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &ViewResult) -> std::fmt::Result {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", "=".repeat(HEADER.len()))?;
    if let Some(summary) = view.result_summary() {
        writeln!(out, "{summary}")?;
    }
    writeln!(out)?;

    if view.is_empty() {
        writeln!(out, "No team members found")?;
        writeln!(out, "Try adjusting your search query.")?;
        return Ok(());
    }

    for record in &view.visible {
        write_card(out, record)?;
        writeln!(out)?;
    }

    if view.show_pagination() {
        write_pagination(out, view)?;
    }
    Ok(())
}

fn write_card(out: &mut String, record: &Record) -> std::fmt::Result {
    writeln!(out, "#{} {}", record.id, record.name)?;
    writeln!(out, "   {}", record.title)?;
    writeln!(out, "   photo: {}", record.photo_ref())?;
    if let Some(bio) = record.bio.as_deref() {
        writeln!(out, "   \"{bio}\"")?;
    }
    if !record.skills.is_empty() {
        writeln!(out, "   skills: {}", record.skills.join(", "))?;
    }
    if let Some(email) = record.email.as_deref() {
        writeln!(out, "   email: {email}")?;
    }
    if let Some(phone) = record.phone.as_deref() {
        writeln!(out, "   phone: {phone}")?;
    }
    for (channel, url) in record.links.iter() {
        writeln!(out, "   {}: {url}", channel.label())?;
    }
    Ok(())
}

fn write_pagination(out: &mut String, view: &ViewResult) -> std::fmt::Result {
    let previous = if view.has_previous() {
        "< Previous"
    } else {
        "  --------"
    };
    let next = if view.has_next() { "Next >" } else { "------" };
    let pages: Vec<String> = view
        .page_numbers()
        .map(|page| {
            if page == view.page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    writeln!(out, "{previous}  {}  {next}", pages.join(" "))
}
