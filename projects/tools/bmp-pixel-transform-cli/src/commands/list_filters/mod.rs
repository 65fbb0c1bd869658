use argh::FromArgs;
use bmp_pixel_transform_filters::FilterKind;

#[derive(FromArgs, Debug)]
/// List the available filters and their parameters
#[argh(subcommand, name = "list-filters")]
pub struct ListFiltersCmd {}

pub fn handle_list_filters_command(_cmd: ListFiltersCmd) {
    for kind in FilterKind::all_values().iter().copied() {
        println!("{}", describe_kind(kind));
    }
}

fn describe_kind(kind: FilterKind) -> String {
    match kind.parameter() {
        Some(parameter) => format!("{:<14} {}:<value>  ({parameter})", kind.name(), kind.name()),
        None => kind.name().to_string(),
    }
}
