use std::io::stdout;

use anyhow::Context;
use customers::{
    configuration::get_configuration,
    factory::CustomerFactory,
    telemetry::{get_subscriber, init_subscriber},
};

const SAMPLE_CUSTOMERS: &[&[&str]] = &[
    &["Eric", "Meyer", "eric98@yahoo.com", "eric98@yahoo.com", "(030) 3945-642298"],
    &["Anne", "Bayer", "anne24@yahoo.de", "(030) 3481-23352", "fax: (030)23451356"],
    &[" Tim ", " Bauer ", "tim2346@gmx.de"],
    &["Ulla", "Blum", "+49 152-92454"],
    &["Saad,", "Ali", "+49 1524-12948210"],
    &["nadine@gmx.de", "+49 170-2349871"],
];

fn main() -> Result<(), anyhow::Error> {
    let configuration = get_configuration().context("Failed to read configuration.")?;

    let subscriber = get_subscriber("customers".into(), configuration.log_level.clone(), stdout);
    init_subscriber(subscriber)?;

    let mut factory = CustomerFactory::from_settings(configuration.id_pool)?;
    for args in SAMPLE_CUSTOMERS {
        match factory.create_customer(args.iter())? {
            Some(customer) => {
                let customer = serde_json::to_string(&customer)?;
                tracing::info!(%customer, "Sample customer");
            }
            None => tracing::warn!(?args, "Sample arguments without a name"),
        }
    }

    Ok(())
}
