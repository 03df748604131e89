//! Sample templates and the one-time bootstrap that stores them.
//!
//! Listing templates never seeds anything. Whether and when to reseed is up
//! to whoever calls [`bootstrap_templates`].

use crate::error::FlowError;
use crate::schema::{
    Answer, Assignment, Criteria, Destination, Field, FieldKind, Filter, Flow, Form, Survey,
};
use crate::store::{FlowRepository, FlowStore};
use ahash::AHashSet;
use tracing::info;
use uuid::Uuid;

pub const HELP_DESK_TEMPLATE_ID: Uuid = Uuid::from_u128(0x5710c736_f5b9_475f_9ef5_76529ea11111);
pub const HIRE_TEMPLATE_ID: Uuid = Uuid::from_u128(0x5710c736_f5b9_475f_9ef5_76529ea22222);
pub const TAXES_TEMPLATE_ID: Uuid = Uuid::from_u128(0x5710c736_f5b9_475f_9ef5_76529ea05fb0);

/// Inserts every sample template whose id is not stored yet.
/// Returns how many were inserted.
pub fn bootstrap_templates<S: FlowStore>(
    repository: &mut FlowRepository<S>,
) -> Result<usize, FlowError> {
    let existing: AHashSet<Uuid> = repository
        .list_templates()?
        .into_iter()
        .map(|t| t.id)
        .collect();

    let mut inserted = 0;
    for template in sample_templates() {
        if existing.contains(&template.id) {
            continue;
        }
        info!(template = %template.id, name = %template.name, "seeding template");
        repository.insert(template)?;
        inserted += 1;
    }
    Ok(inserted)
}

pub fn sample_templates() -> Vec<Flow> {
    vec![help_desk_template(), hire_template(), taxes_template()]
}

fn string_field(key: &str, prompt: &str) -> Field {
    Field::new(FieldKind::String, key, prompt, None)
}

fn template(id: Uuid, name: &str, description: &str, survey: Survey) -> Flow {
    Flow {
        id,
        name: name.to_string(),
        description: description.to_string(),
        thumbnail: "placeholder.jpg".to_string(),
        is_template: true,
        survey,
        forms: Vec::new(),
        criteria: Vec::new(),
        destination: Destination::new(),
    }
}

fn yes_no_unknown(category: &str, prompt: &str) -> Criteria {
    Criteria::new(
        category,
        prompt,
        vec![
            Answer::new("Yes", "yes"),
            Answer::new("No", "no"),
            Answer::new("Unknown", "unknown"),
        ],
    )
}

pub fn help_desk_template() -> Flow {
    let mut flow = template(
        HELP_DESK_TEMPLATE_ID,
        "Help Desk Questionaire",
        "Demo of the helpdesk questionaire",
        Survey::new(vec![
            string_field("firstname", "Please enter your first name"),
            string_field("lastname", "Please enter your last name"),
            string_field("jobtitle", "Please enter your job title"),
        ]),
    );
    flow.forms = vec![Form {
        id: Uuid::new_v4(),
        name: "NESD_Questionnaire".to_string(),
        file_name: "NESD_Questionnaire.doc".to_string(),
        kind: "doc".to_string(),
        assignments: Vec::new(),
    }];
    flow.criteria = vec![
        yes_no_unknown("card", "Credit Card?"),
        yes_no_unknown("less700k", "Purchase less than $700,000?"),
        yes_no_unknown("gr100", "Purchase between $700,000 and $13.5 Million?"),
    ];
    flow
}

pub fn hire_template() -> Flow {
    template(
        HIRE_TEMPLATE_ID,
        "Hire",
        "Hire people!",
        Survey::new(vec![
            string_field("firstname", "Please enter employee first name"),
            string_field("lastname", "Please enter employee last name"),
        ]),
    )
}

pub fn taxes_template() -> Flow {
    let goods_provided = Filter::new("6a", "yes");
    let mut flow = template(
        TAXES_TEMPLATE_ID,
        "Taxes",
        "File your taxes.",
        Survey::new(vec![
            string_field("firstname", "Please enter Donee's first name"),
            string_field("lastname", "Please enter Donee's last name"),
            string_field("street", "Please enter street address"),
            string_field("address", "Enter City, State, and Country"),
            string_field("zip", "Enter Zip Code"),
            string_field("phone", "Enter Telphone number"),
            string_field("tin1", "Donee's TIN"),
            string_field("filerTin", "Filer's TIN"),
            string_field("filerFirstName", "Filer's first name"),
            string_field("filerLastName", "Filer's last name"),
            string_field("filerAddress1", "Street address"),
            string_field("filerAddress2", "City/town, State, Zip Code, Country"),
            // box 1
            string_field("date", "Date of contribution"),
            // boxes 2a-2d
            string_field("miles", "Odometer mileage"),
            string_field("year", "Year"),
            string_field("make", "Make"),
            string_field("model", "Model"),
            // box 3
            string_field("vin", "Vehicle or other Identification number"),
            // boxes 4b, 4c
            string_field("saleDate", "Date of Sale"),
            string_field("amount", "Gross proceeds from sale"),
            // boxes 6b, 6c
            Field::new(
                FieldKind::String,
                "barter",
                "Value of goods and services provided in exchange for the vehicle",
                Some(goods_provided.clone()),
            ),
            Field::new(
                FieldKind::String,
                "goodsDescription",
                "Describe the goods and services, if any, that were provided.",
                Some(goods_provided.clone()),
            ),
        ]),
    );

    flow.criteria = vec![
        Criteria::yes_no(
            "6a",
            "Did you provide goods or services in exchange for the vehicle?",
        ),
        Criteria::yes_no(
            "Vehicle Transaction",
            "Donee certifies that vehicle was sold in arm's length transaction to unrelated party",
        ),
        Criteria::yes_no(
            "Transfer Information",
            "Donee certifies that vehicle will not be transferred for money, other property, or services before completion of material improvements or significant intervening use",
        ),
        Criteria::yes_no(
            "Relocation of Vehicle",
            "Donee certifies that vehicle is to be transferred to a needy individual for significantly below fair market value in furtherance of donee's charitable purpose",
        ),
        Criteria::yes_no(
            "User Agreement",
            "Donee certifies the following detailed description of material improvements or significant intervening use and duration of use",
        ),
        Criteria::new(
            "Charitable Contributions",
            "Describe the goods and services, if any, that were provided. If this box is checked, donee certifies that the goods and services consisted solely of intangible religious benefits.",
            vec![Answer::new("Yes", "yes")],
        ),
        Criteria::new(
            "Contributions of Motor Vehicles, Boats and Airplanes",
            "Under the law, the donor may not claim a deduction of more than $500 for this vehicle if this box is checked",
            vec![Answer::new("Yes", "yes")],
        ),
    ];

    flow.forms = vec![
        Form {
            id: Uuid::new_v4(),
            name: "f1098c".to_string(),
            file_name: "f1098c.pdf".to_string(),
            kind: "pdf".to_string(),
            assignments: vec![
                Assignment::new("firstname", "topmostSubform[0].CopyA[0].TopLeftColumn[0].f1_1[0]"),
                Assignment::new("tin1", "topmostSubform[0].CopyA[0].TopLeftColumn[0].f1_2[0]"),
                Assignment::new("filerTin", "topmostSubform[0].CopyA[0].TopLeftColumn[0].f1_3[0]"),
                Assignment::new(
                    "filerFirstName",
                    "topmostSubform[0].CopyA[0].TopLeftColumn[0].f1_4[0]",
                ),
                Assignment::new(
                    "filerAddress1",
                    "topmostSubform[0].CopyA[0].TopLeftColumn[0].f1_5[0]",
                ),
                Assignment::new(
                    "filerAddress2",
                    "topmostSubform[0].CopyA[0].TopLeftColumn[0].f1_7[0]",
                ),
                // checkbox
                Assignment::new("6a", "topmostSubform[0].CopyA[0].c1_5[0]"),
                Assignment::new("barter", "topmostSubform[0].CopyA[0].f1_16[0]")
                    .when(goods_provided.clone()),
                Assignment::new("goodsDescription", "topmostSubform[0].CopyA[0].f1_17[0]")
                    .when(goods_provided),
            ],
        },
        Form {
            id: Uuid::new_v4(),
            name: "f1040ez".to_string(),
            file_name: "f1040ez.pdf".to_string(),
            kind: "pdf".to_string(),
            assignments: vec![
                Assignment::new("filerFirstName", "topmostSubform[0].Page1[0].Entity[0].f1_1[0]"),
                Assignment::new("filerLastName", "topmostSubform[0].Page1[0].Entity[0].f1_2[0]"),
                Assignment::new("filerAddress1", "topmostSubform[0].Page1[0].Entity[0].f1_6[0]"),
                Assignment::new("filerAddress2", "topmostSubform[0].Page1[0].Entity[0].f1_8[0]"),
            ],
        },
    ];
    flow
}
