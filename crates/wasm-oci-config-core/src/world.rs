/// Marker line opening the root world in `wasm-tools component wit` output.
const ROOT_WORLD_OPEN: &str = "world root {";
const BLOCK_CLOSE: &str = "}";

/// Line boundaries recognized when scanning WIT text. Besides `\n` this
/// covers lone `\r`, form feeds and the Unicode line/paragraph separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

const IMPORT_PREFIX: &str = "import ";
const EXPORT_PREFIX: &str = "export ";

/// Imports and exports declared directly in a component's root world.
///
/// Both lists keep source order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldDeclarations {
    pub imports: Vec<String>,
    pub exports: Vec<String>,
}

impl WorldDeclarations {
    /// All declarations, imports first.
    pub fn declarations(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .chain(self.exports.iter())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.exports.is_empty()
    }
}

/// Extract the `import`/`export` lines of the `world root { ... }` block.
///
/// Marker lines are matched by exact equality after trimming. Scanning
/// stops at the first `}` inside the block, so only the first root world
/// is read. Text without a root world yields no declarations.
pub fn parse_root_world(wit_text: &str) -> WorldDeclarations {
    let mut decls = WorldDeclarations::default();
    let mut inside = false;

    // `\r\n` leaves an empty piece, which is skipped like any blank line.
    for line in wit_text.split(LINE_BREAKS) {
        let line = line.trim();

        if !inside {
            if line == ROOT_WORLD_OPEN {
                inside = true;
            }
            continue;
        }

        if line == BLOCK_CLOSE {
            break;
        }

        if let Some(rest) = line.strip_prefix(IMPORT_PREFIX) {
            decls.imports.push(declaration_name(rest));
        } else if let Some(rest) = line.strip_prefix(EXPORT_PREFIX) {
            decls.exports.push(declaration_name(rest));
        }
    }

    decls
}

fn declaration_name(rest: &str) -> String {
    rest.trim_end_matches(';').trim().to_string()
}
