use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::scan::TEST_SUBDIR;
use crate::errors::DatasetError;
use crate::scan;
use crate::types::{ClassName, ClassNumber, OneHotRow};

/// Which subset of the collection a file belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    bitcode::Encode,
    bitcode::Decode,
)]
pub enum Split {
    /// Training split: files directly inside a class directory.
    Train,
    /// Test split: files inside a class directory's `test/` subdirectory.
    Test,
}

impl Split {
    /// Extra path component between the class directory and the filename.
    fn subdir(self) -> Option<&'static str> {
        match self {
            Split::Train => None,
            Split::Test => Some(TEST_SUBDIR),
        }
    }
}

/// One indexed file: its name, owning class, and split.
///
/// Never stores a full path; paths are reconstructed from the index root,
/// the class name at discovery time, and the split marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, bitcode::Encode, bitcode::Decode)]
pub struct FileRecord {
    /// Filename without any directory component.
    pub filename: String,
    /// Index into the owning index's class-name list.
    pub class_number: ClassNumber,
    /// Which split the file was enumerated under.
    pub split: Split,
}

/// Parallel path/label views over one split.
///
/// The three vectors are index-aligned: `paths[i]` belongs to class
/// `class_numbers[i]` and `one_hot[i]` is that label's encoded row.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledSplit {
    /// Full reconstructed file paths, in enumeration order.
    pub paths: Vec<PathBuf>,
    /// Integer class label per file.
    pub class_numbers: Vec<ClassNumber>,
    /// One-hot label row per file; width is the index's class count.
    pub one_hot: Vec<OneHotRow>,
}

/// Immutable index of a class-per-directory image collection.
///
/// Built once by scanning the filesystem, then either held in memory or
/// persisted verbatim through [`crate::cache`]. Class numbering and file
/// ordering are fixed at construction; a re-scan of a changed tree may
/// produce a different assignment, which is exactly what the persisted
/// index protects downstream consumers from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bitcode::Encode, bitcode::Decode)]
pub struct DatasetIndex {
    root: String,
    extensions: Vec<String>,
    class_names: Vec<ClassName>,
    train: Vec<FileRecord>,
    test: Vec<FileRecord>,
}

impl DatasetIndex {
    /// Scan `root` and build an index of its class directories.
    ///
    /// Each immediate subdirectory of `root` becomes a class, numbered in
    /// discovery order. Files directly inside a class directory form its
    /// training records; files under `<class>/test/` form its test
    /// records. A class with zero files in either split is legal. Fails
    /// only when `root` itself cannot be resolved or listed.
    pub fn build<P, S>(root: P, extensions: &[S]) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|err| DatasetError::RootNotAccessible {
                path: root.to_path_buf(),
                source: err,
            })?;
        let extensions: Vec<String> = extensions
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();

        let class_names = scan::discover_classes(&root)?;
        let mut train = Vec::new();
        let mut test = Vec::new();
        for (class_number, name) in class_names.iter().enumerate() {
            let class_dir = root.join(name);
            for filename in scan::matching_filenames(&class_dir, &extensions) {
                train.push(FileRecord {
                    filename,
                    class_number,
                    split: Split::Train,
                });
            }
            for filename in scan::matching_filenames(&class_dir.join(TEST_SUBDIR), &extensions) {
                test.push(FileRecord {
                    filename,
                    class_number,
                    split: Split::Test,
                });
            }
        }

        Ok(Self {
            root: root.to_string_lossy().into_owned(),
            extensions,
            class_names,
            train,
            test,
        })
    }

    /// Absolute root directory the index was built from.
    pub fn root(&self) -> &Path {
        Path::new(&self.root)
    }

    /// Accepted extensions, lower-cased and dotless.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Class names in discovery order; position equals class-number.
    pub fn class_names(&self) -> &[ClassName] {
        &self.class_names
    }

    /// Total number of discovered classes.
    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    /// File records for `split`, in enumeration order.
    pub fn records(&self, split: Split) -> &[FileRecord] {
        match split {
            Split::Train => &self.train,
            Split::Test => &self.test,
        }
    }

    /// Reconstruct full paths for `split` lazily, in record order.
    pub fn paths(&self, split: Split) -> impl Iterator<Item = PathBuf> + '_ {
        self.records(split).iter().map(|record| self.path_for(record))
    }

    /// Full path for one record: `root/class_name[/test]/filename`.
    ///
    /// Uses the exact class-name string the directory had at discovery
    /// time; no renaming or sanitization.
    pub fn path_for(&self, record: &FileRecord) -> PathBuf {
        let mut path = Path::new(&self.root).join(&self.class_names[record.class_number]);
        if let Some(subdir) = record.split.subdir() {
            path.push(subdir);
        }
        path.push(&record.filename);
        path
    }

    /// Paths, class numbers, and one-hot labels for the training split.
    pub fn training_set(&self) -> LabeledSplit {
        self.labeled_split(Split::Train)
    }

    /// Paths, class numbers, and one-hot labels for the test split.
    pub fn test_set(&self) -> LabeledSplit {
        self.labeled_split(Split::Test)
    }

    fn labeled_split(&self, split: Split) -> LabeledSplit {
        let class_numbers: Vec<ClassNumber> = self
            .records(split)
            .iter()
            .map(|record| record.class_number)
            .collect();
        // Width comes from the index, not the split, so train and test
        // columns always correspond.
        let one_hot = one_hot_encoded(&class_numbers, Some(self.num_classes()));
        LabeledSplit {
            paths: self.paths(split).collect(),
            class_numbers,
            one_hot,
        }
    }
}

/// One-hot encode `class_numbers` into rows of width `num_classes`.
///
/// Each row carries a single `1.0` at the class-number's position and
/// `0.0` elsewhere. When `num_classes` is `None` the width defaults to
/// the largest class-number seen plus one (zero rows encode to width 0).
pub fn one_hot_encoded(class_numbers: &[ClassNumber], num_classes: Option<usize>) -> Vec<OneHotRow> {
    let width = num_classes.unwrap_or_else(|| {
        class_numbers
            .iter()
            .max()
            .map(|largest| largest + 1)
            .unwrap_or(0)
    });
    class_numbers
        .iter()
        .map(|&class_number| {
            debug_assert!(class_number < width, "class-number out of one-hot range");
            let mut row = vec![0.0; width];
            if class_number < width {
                row[class_number] = 1.0;
            }
            row
        })
        .collect()
}
