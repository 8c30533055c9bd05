use crate::reports;
use keyingtime::error::KtResult;
use keyingtime::layouts;
use keyingtime::timing::KeyingTable;
use tracing::debug;

pub fn run(table: &KeyingTable, text: &str, layout: Option<&str>, json: bool) -> KtResult<()> {
    let keystrokes = match layout {
        Some(name) => {
            let remap = layouts::resolve(name)?;
            let converted = remap.convert(text);
            debug!("Remapped for '{}': {:?}", name, converted);
            converted
        }
        None => text.to_string(),
    };

    let time = table.estimate(&keystrokes);

    if json {
        reports::print_estimate_json(time, layout, table.clamped().len())?;
    } else {
        println!("{}", time);
    }
    Ok(())
}
