//! Demo driver: builds sample model instances, maps them to the wire
//! hierarchy through the default profile, and prints the tagged JSON.

use chrono::Local;
use log::info;
use uuid::Uuid;

use wiremap::codec;
use wiremap::mapping::{profile, PolymorphicMapper};
use wiremap::{BaseModel, DetailModel, InnerModel};

fn sample_base(detail: DetailModel) -> BaseModel {
    BaseModel {
        int_property: 1,
        string_property: "Base".to_string(),
        inner_property: Some(InnerModel {
            guid_property: Uuid::new_v4(),
            string_property: "Inner".to_string(),
            date_only_property: Local::now().date_naive(),
            date_time_offset_property: Local::now().fixed_offset(),
        }),
        derived_property: Some(detail),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let registry = profile::build()?;
    let mapper = PolymorphicMapper::new(&registry);
    info!("registry frozen with {} rules", registry.rule_count());

    let model_with_a = sample_base(DetailModel::DerivedA {
        a_property: "DerivedA".to_string(),
        guid_property: Uuid::new_v4(),
    });
    let model_with_b = sample_base(DetailModel::DerivedB {
        b_property: "DerivedB".to_string(),
        b_guid_property: Uuid::new_v4(),
        guid_property: Uuid::new_v4(),
    });

    let dto_with_a = mapper.base_to_wire(&model_with_a)?;
    let dto_with_b = mapper.base_to_wire(&model_with_b)?;

    println!("{}", codec::encode_pretty(&dto_with_a)?);
    println!("{}", codec::encode_pretty(&dto_with_b)?);

    // The detail hierarchy can also be mapped standalone, independent of
    // the outer object.
    if let Some(detail) = &model_with_a.derived_property {
        println!("{}", codec::encode_pretty(&mapper.detail_to_wire(detail)?)?);
    }
    if let Some(detail) = &model_with_b.derived_property {
        println!("{}", codec::encode_pretty(&mapper.detail_to_wire(detail)?)?);
    }

    Ok(())
}
