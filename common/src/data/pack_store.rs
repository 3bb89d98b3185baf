use anyhow::{anyhow, Context};
use log::{debug, warn};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use super::{
    cards::{Pack, PackMeta},
    deck_store,
};

pub const PROMPTS_FILE: &str = "prompts.csv";
pub const RESPONSES_FILE: &str = "responses.csv";

/// A store to manage loading and unloading [Packs](Pack).
///
/// Every sub-directory of the pack directory holding both a `prompts.csv`
/// and a `responses.csv` is a pack named after the directory.
pub struct PackStore {
    pack_dir: PathBuf,
    loaded_packs: BTreeMap<String, Arc<Pack>>,
    possible_packs: BTreeMap<String, PackMeta>,
}

impl PackStore {
    /// Creates a new PackStore, reading every pack once to count its cards.
    pub fn new<P: AsRef<Path>>(pack_dir: P) -> anyhow::Result<Self> {
        let mut pack_store = Self {
            pack_dir: pack_dir.as_ref().to_owned(),
            loaded_packs: BTreeMap::new(),
            possible_packs: BTreeMap::new(),
        };
        pack_store.init()?;
        Ok(pack_store)
    }

    fn init(&mut self) -> anyhow::Result<()> {
        let entries = fs::read_dir(&self.pack_dir)
            .with_context(|| format!("Error reading pack directory {}", self.pack_dir.display()))?;

        for entry in entries {
            let path = entry.context("Error reading pack directory entry")?.path();
            if !path.is_dir() {
                continue;
            }

            let name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_owned(),
                None => {
                    warn!("Skipping pack directory with a non UTF-8 name: {}", path.display());
                    continue;
                }
            };

            if !path.join(PROMPTS_FILE).is_file() || !path.join(RESPONSES_FILE).is_file() {
                warn!(
                    "Skipping {}: a pack needs both {} and {}",
                    path.display(),
                    PROMPTS_FILE,
                    RESPONSES_FILE
                );
                continue;
            }

            let pack = Self::read_pack(&path, &name)?;
            self.possible_packs.insert(name, pack.meta());
        }

        debug!(
            "Found {} packs in {}",
            self.possible_packs.len(),
            self.pack_dir.display()
        );
        Ok(())
    }

    /// Loads a pack from its CSV files, or returns the copy already loaded.
    pub fn load_pack(&mut self, pack_name: &str) -> anyhow::Result<Arc<Pack>> {
        if let Some(pack) = self.loaded_packs.get(pack_name) {
            return Ok(Arc::clone(pack));
        }

        if !self.possible_packs.contains_key(pack_name) {
            return Err(anyhow!("Pack {} is not found", pack_name));
        }

        let pack = Arc::new(Self::read_pack(&self.pack_dir.join(pack_name), pack_name)?);
        self.loaded_packs
            .insert(pack_name.to_owned(), Arc::clone(&pack));

        Ok(pack)
    }

    /// Unloads a pack if nothing outside the store still holds it.
    pub fn unload_pack(&mut self, pack_name: &str) {
        let unused = self
            .loaded_packs
            .get(pack_name)
            .map_or(false, |pack| Arc::strong_count(pack) == 1);

        if unused {
            self.loaded_packs.remove(pack_name);
        }
    }

    pub fn is_loaded(&self, pack_name: &str) -> bool {
        self.loaded_packs.contains_key(pack_name)
    }

    /// Writes a new pack directory and makes the pack available.
    pub fn create_pack(&mut self, pack: &Pack) -> anyhow::Result<()> {
        if self.possible_packs.contains_key(&pack.name) {
            return Err(anyhow!("Pack {} already exists", pack.name));
        }

        let dir = self.pack_dir.join(&pack.name);
        fs::create_dir_all(&dir).context("Error creating pack directory")?;
        deck_store::save(&pack.prompts, dir.join(PROMPTS_FILE)).context("Error saving prompts")?;
        deck_store::save(&pack.responses, dir.join(RESPONSES_FILE))
            .context("Error saving responses")?;

        self.possible_packs.insert(pack.name.clone(), pack.meta());
        Ok(())
    }

    /// Pack names with their card counts, sorted by name.
    pub fn possible_packs(&self) -> &BTreeMap<String, PackMeta> {
        &self.possible_packs
    }

    pub fn read_pack(dir: &Path, name: &str) -> anyhow::Result<Pack> {
        let prompts = deck_store::load_prompts(dir.join(PROMPTS_FILE))
            .with_context(|| format!("Error reading prompts of pack {}", name))?;
        let responses = deck_store::load_responses(dir.join(RESPONSES_FILE))
            .with_context(|| format!("Error reading responses of pack {}", name))?;
        Ok(Pack::new(name, prompts, responses))
    }
}
