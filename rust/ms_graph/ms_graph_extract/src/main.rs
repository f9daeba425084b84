/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! A program for turning [Microsoft OpenAPI
//! metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml)
//! into the Rust models and request builders of `ms_graph`.

use quote::quote;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs, io::Write};

mod extract;
mod naming;
mod openapi;
mod oxidize;

use crate::extract::path::{extract_from_oa_path, navigation};
use crate::extract::schema::{
    discriminator_mapping, enum_values, extract_from_schema, inherited_properties, odata_type,
};
use crate::naming::{base_name, namespace, simple_name, snakeify};
use crate::openapi::{LoadedYaml, load_yaml};
use crate::oxidize::{paths, types};

/// Models to generate, by their name without the `microsoft.graph.` prefix.
/// Request bodies declared under `components/requestBodies` are listed by
/// their key.
const SUPPORTED_TYPES: [&str; 28] = [
    "ODataErrors.ErrorDetails",
    "ODataErrors.InnerError",
    "ODataErrors.MainError",
    "ODataErrors.ODataError",
    "bodyType",
    "channel",
    "channelCollectionResponse",
    "channelMembershipType",
    "directoryObject",
    "directoryObjectCollectionResponse",
    "emailAddress",
    "entity",
    "group",
    "groupCollectionResponse",
    "importance",
    "itemBody",
    "mailFolder",
    "mailFolderCollectionResponse",
    "mailboxSettings",
    "message",
    "messageCollectionResponse",
    "outlookItem",
    "recipient",
    "sendMailRequestBody",
    "team",
    "teamCollectionResponse",
    "user",
    "userCollectionResponse",
];

/// The subset of [`SUPPORTED_TYPES`] that are string enumerations.
const SUPPORTED_ENUMS: [&str; 3] = ["bodyType", "channelMembershipType", "importance"];

/// Types whose discriminator mapping is turned into a `Kind` enum.
const POLYMORPHIC_TYPES: [&str; 1] = ["directoryObject"];

const SUPPORTED_PATHS: [&str; 21] = [
    "/directoryObjects",
    "/directoryObjects/{directoryObject-id}",
    "/groups",
    "/groups/{group-id}",
    "/me",
    "/me/mailFolders",
    "/me/mailFolders/delta()",
    "/me/mailFolders/{mailFolder-id}",
    "/me/mailFolders/{mailFolder-id}/messages",
    "/me/messages",
    "/me/messages/{message-id}",
    "/me/sendMail",
    "/teams",
    "/teams/{team-id}",
    "/teams/{team-id}/channels",
    "/teams/{team-id}/channels/{channel-id}",
    "/users",
    "/users/$count",
    "/users/{user-id}",
    "/users/{user-id}/mailFolders",
    "/users/{user-id}/mailFolders/{mailFolder-id}",
];

const FILE_LEDE: &str = r#"/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN
"#;

const GENERATION_DISCLOSURE: &str = "Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`.";

fn print_usage(this_program: &str) {
    println!("Usage: {this_program} <openapi.yaml> <ms_graph_path>");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let this_program = args
            .first()
            .map(String::as_str)
            .unwrap_or("ms_graph_extract");
        print_usage(this_program);
        std::process::exit(1);
    }

    let yaml_path = Path::new(&args[1]);
    let out_path = Path::new(&args[2]);

    let yaml = fs::read_to_string(yaml_path)?;
    println!("file read");
    let loaded = load_yaml(&yaml)?;
    println!("loaded components and paths");

    generate_types(&out_path.join("src/types/"), &loaded)?;
    generate_paths(&out_path.join("src/paths/"), &loaded)?;

    println!("Done. Run `cargo fmt` to format the generated files.");
    Ok(())
}

fn generate_types(
    types_path: &Path,
    loaded: &LoadedYaml,
) -> Result<(), Box<dyn std::error::Error>> {
    // Modules per directory, relative to `types_path`.
    let mut modules: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();

    for (full_name, schema) in &loaded.schemas {
        let base = base_name(full_name);
        if !SUPPORTED_TYPES.contains(&base.as_str()) {
            continue;
        }
        println!("generating Rust type for {full_name}");
        let simple = simple_name(&base);
        let description = extract_from_schema(schema).0;

        let generated = if let Some(values) = enum_values(schema) {
            assert!(
                SUPPORTED_ENUMS.contains(&base.as_str()),
                "{base} is an enum but not listed in SUPPORTED_ENUMS"
            );
            let enum_type = types::EnumType::new(&base, description, values.to_vec());
            quote!(#enum_type)
        } else {
            let (_, properties) = extract_from_schema(schema);
            let inherited = inherited_properties(&loaded.schemas, schema);
            let derived = if POLYMORPHIC_TYPES.contains(&base.as_str()) {
                discriminator_mapping(schema)
            } else {
                Vec::new()
            };
            let graph_type = types::GraphType::new(
                &base,
                description,
                odata_type(full_name, schema),
                properties,
                inherited,
                derived,
            );
            quote!(#graph_type)
        };

        let dir = namespace(&base).iter().collect::<PathBuf>();
        write_generated(&types_path.join(&dir), simple, &generated.to_string())?;
        register_module(&mut modules, &dir, snakeify(simple));
    }

    for (name, body) in &loaded.request_bodies {
        if !SUPPORTED_TYPES.contains(&name.as_str()) {
            continue;
        }
        println!("generating Rust type for request body {name}");
        let (description, properties) = extract_from_schema(&body.schema);
        let graph_type = types::GraphType::new(
            name,
            description.or_else(|| body.description.clone()),
            None,
            properties,
            Vec::new(),
            Vec::new(),
        );
        write_generated(types_path, name, &quote!(#graph_type).to_string())?;
        register_module(&mut modules, Path::new(""), snakeify(name));
    }

    for (dir, modules) in &mut modules {
        modules.sort();
        write_module_file(&types_path.join(dir), modules)?;
    }
    Ok(())
}

/// Record `module` in `dir`, and every namespace directory in its parent.
fn register_module(modules: &mut BTreeMap<PathBuf, Vec<String>>, dir: &Path, module: String) {
    let entry = modules.entry(dir.to_path_buf()).or_default();
    if !entry.contains(&module) {
        entry.push(module);
    }
    if let (Some(parent), Some(name)) = (dir.parent(), dir.file_name()) {
        let name = name.to_string_lossy().into_owned();
        register_module(modules, parent, name);
    }
}

fn generate_paths(
    paths_path: &Path,
    loaded: &LoadedYaml,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut modules = vec![];
    for name in SUPPORTED_PATHS {
        let Some(oa_path) = loaded.paths.get(name) else {
            eprintln!("path {name} is missing from the metadata");
            continue;
        };
        println!("generating request builders for {name}");
        let path = extract_from_oa_path(name.to_string(), oa_path, loaded);
        let children = navigation(name, &SUPPORTED_PATHS);
        let request_builder = paths::PathModule::new(path, children);
        let module = snakeify(name);
        write_generated(paths_path, &module, &quote!(#request_builder).to_string())?;
        modules.push(module);
    }
    modules.sort();
    write_module_file(paths_path, &modules)
}

fn write_generated(
    dir: &Path,
    name: &str,
    generated: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let filename = format!("{}.rs", snakeify(name));
    let destination = dir.join(filename);
    let mut file = fs::File::create(&destination)?;

    write!(file, "{FILE_LEDE}\n{generated}")?;
    println!("Wrote generated Rust code to {}\n", destination.to_string_lossy());
    Ok(())
}

fn write_module_file(
    out_path: &Path,
    modules: &[impl AsRef<str>],
) -> Result<(), Box<dyn std::error::Error>> {
    let module_path = out_path.join("mod.rs");
    let mut module_file = fs::File::create(&module_path)?;
    writeln!(module_file, "{FILE_LEDE}")?;
    for module in modules {
        writeln!(module_file, "pub mod {};", module.as_ref())?;
    }
    println!("Wrote module out to {}\n", module_path.to_string_lossy());
    Ok(())
}
