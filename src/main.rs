use std::{io, process::ExitCode};

use libmembers::{member::PremiumMember, summary::write_summary};

fn main() -> ExitCode {
    env_logger::init();

    let mut member = PremiumMember::new("Alice Smith", "PM001");
    member.set_membership_period("12 months").set_discount(15);

    log::debug!("Built premium member {:?}", member);

    match write_summary(&member, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}: {err:?}");
            ExitCode::FAILURE
        }
    }
}
