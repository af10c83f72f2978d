use std::{fmt::Display, io::Write};

use thiserror::Error;

use crate::member::PremiumMember;

/// Shown in place of a premium attribute that was never set.
const UNSET: &str = "None";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to write member summary")]
    Io(#[from] std::io::Error),
}

fn or_unset<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNSET.to_owned(), |v| v.to_string())
}

pub fn summary_lines(member: &PremiumMember) -> [String; 4] {
    [
        format!("Name: {}", member.name()),
        format!("ID: {}", member.id()),
        format!("Period: {}", or_unset(member.membership_period())),
        format!("Discount: {}%", or_unset(member.discount())),
    ]
}

pub fn write_summary<W>(member: &PremiumMember, out: &mut W) -> Result<(), SummaryError>
where
    W: Write,
{
    for line in summary_lines(member) {
        writeln!(out, "{line}")?;
    }

    out.flush()?;

    Ok(())
}
