//! Validating arguments with guards.
//!
//! Run with: cargo run --example guards

use guardtext::{ensure_non_blank, ensure_non_empty, RangeExt, StringValues};
use std::error::Error;

struct Deployment {
    name: String,
    replicas: u32,
    regions: Vec<String>,
    labels: StringValues,
}

fn validate(deployment: &Deployment) -> guardtext::Result<()> {
    ensure_non_blank!(deployment.name)?;
    ensure_non_empty!(deployment.regions)?;
    deployment
        .replicas
        .ensure_positive("deployment.replicas")?
        .ensure_at_most(50, "deployment.replicas")?;
    deployment.labels.ensure_non_blank("deployment.labels")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut deployment = Deployment {
        name: "api".to_string(),
        replicas: 3,
        regions: vec!["eu-west-1".to_string()],
        labels: StringValues::from(vec!["tier=web"]),
    };

    validate(&deployment)?;
    println!("✓ deployment '{}' is valid", deployment.name);

    deployment.replicas = 0;
    if let Err(err) = validate(&deployment) {
        println!("✗ {}", err);
    }

    deployment.replicas = 3;
    deployment.labels = StringValues::from(vec![Some(" "), None]);
    if let Err(err) = validate(&deployment) {
        println!("✗ {} (parameter: {:?})", err, err.param());
    }

    Ok(())
}
