use miette::Result;

use bomkit_ops::ops_projects;
use bomkit_ops::ops_setup::Preflight;

pub fn exec(pre: &Preflight) -> Result<()> {
    for row in ops_projects::projects(pre)? {
        match row.catalog {
            Some(name) => println!("{} {} [catalog: {name}]", row.path, row.coordinate),
            None => println!("{} {}", row.path, row.coordinate),
        }
    }
    Ok(())
}
