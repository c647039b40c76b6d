use ascii_table::{Align, AsciiTable};
use clap::{arg, Arg, ArgMatches, Command};
use roster_core::{
    controller::{FormController, ListController, SubmitError, Submitted},
    validation::Field,
    Record, StoreError,
};

use crate::context::Context;

const FIELDS: [(Field, &str, &str); 3] = [
    (Field::Name, "name", "employee's full name"),
    (Field::Position, "position", "job title"),
    (Field::Level, "level", "experience level: Intern, Junior or Senior"),
];

fn field_args(required: bool) -> Vec<Arg> {
    FIELDS
        .iter()
        .map(|(_, id, help)| Arg::new(*id).long(*id).required(required).help(*help))
        .collect()
}

pub fn args() -> Command {
    Command::new("record")
        .about("manage personnel records")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("list records"))
        .subcommand(
            Command::new("show")
                .about("show a record")
                .arg(arg!(<ID> "record id"))
                .arg_required_else_help(true),
        )
        .subcommand(
            Command::new("create")
                .about("create a record")
                .args(field_args(true))
                .arg_required_else_help(true),
        )
        .subcommand(
            Command::new("edit")
                .about("edit a record, changing only the given fields")
                .arg(arg!(<ID> "record id"))
                .args(field_args(false))
                .arg_required_else_help(true),
        )
        .subcommand(
            Command::new("delete")
                .about("delete a record")
                .arg(arg!(<ID> "record id"))
                .arg_required_else_help(true),
        )
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> anyhow::Result<&'a String> {
    matches
        .get_one::<String>(id)
        .ok_or_else(|| anyhow::anyhow!("{id} expected"))
}

fn print_records(records: &[Record]) {
    let table_data: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            vec![
                record.id.clone(),
                record.name.clone(),
                record.position.clone(),
                record.level.to_string(),
            ]
        })
        .collect();

    let mut ascii_table = AsciiTable::default();

    for (index, header) in ["ID", "NAME", "POSITION", "LEVEL"].iter().enumerate() {
        ascii_table
            .column(index)
            .set_header(*header)
            .set_align(Align::Left);
    }

    ascii_table.print(table_data);
}

async fn submit(form: &mut FormController, matches: &ArgMatches) -> anyhow::Result<Submitted> {
    for (field, id, _) in FIELDS.iter() {
        if let Some(value) = matches.get_one::<String>(id) {
            form.update_field(*field, value.as_str());
        }
    }

    match form.submit().await {
        Ok(submitted) => Ok(submitted),
        Err(SubmitError::Invalid(errors)) => {
            for (_, message) in errors.iter() {
                tracing::error!("{message}");
            }

            Err(anyhow::anyhow!("record not saved"))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn handlers(model_match: &ArgMatches, context: &Context) -> anyhow::Result<()> {
    let store = context.record_store()?;

    match model_match.subcommand() {
        Some(("list", _)) => {
            let mut list = ListController::new(store);

            if let Err(err) = list.load().await {
                tracing::error!("{}", list.error().unwrap_or_default());
                return Err(err.into());
            }

            if list.records().is_empty() {
                tracing::info!("no employee records found");

                return Ok(());
            }

            print_records(list.records());

            Ok(())
        }
        Some(("show", show_match)) => {
            let id = required(show_match, "ID")?;
            let mut form = FormController::new(store);

            form.initialize(Some(id.as_str())).await?;

            let record = Record {
                id: id.clone(),
                name: form.form().name.clone(),
                position: form.form().position.clone(),
                level: form.form().level.parse()?,
            };
            print_records(&[record]);

            Ok(())
        }
        Some(("create", create_match)) => {
            let mut form = FormController::new(store);
            form.initialize(None).await?;

            if let Submitted::Created(record) = submit(&mut form, create_match).await? {
                tracing::info!("record '{}' created", record.id);
            }

            Ok(())
        }
        Some(("edit", edit_match)) => {
            let id = required(edit_match, "ID")?;
            let mut form = FormController::new(store);

            match form.initialize(Some(id.as_str())).await {
                Ok(()) => {}
                Err(StoreError::NotFound { .. }) => {
                    return Err(anyhow::anyhow!("record '{id}' not found"));
                }
                Err(err) => return Err(err.into()),
            }

            submit(&mut form, edit_match).await?;

            tracing::info!("record '{id}' updated");

            Ok(())
        }
        Some(("delete", delete_match)) => {
            let id = required(delete_match, "ID")?;
            let mut list = ListController::new(store);

            list.load().await?;
            list.delete_record(id).await?;

            tracing::info!("record '{id}' deleted, {} remaining", list.records().len());

            Ok(())
        }
        _ => unreachable!(), // If all subcommands are defined above, anything else is unreachable
    }
}
