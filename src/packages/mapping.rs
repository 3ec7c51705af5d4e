//! Built-in distribution name table.
//!
//! Many packages are installed under one name and imported under another
//! (`pip install pillow`, `import PIL`). This table records the ones we
//! know about, keyed by lowercase distribution name.

/// A single built-in mapping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageMapping {
    /// Lowercase distribution name (what installers are asked for).
    pub distribution: &'static str,
    /// Module path used to verify the install.
    pub import_name: &'static str,
    /// Label used in status output.
    pub display_name: &'static str,
}

const fn entry(
    distribution: &'static str,
    import_name: &'static str,
    display_name: &'static str,
) -> PackageMapping {
    PackageMapping {
        distribution,
        import_name,
        display_name,
    }
}

/// Known packages whose import or display name differs from the distribution name.
pub const PACKAGE_MAPPINGS: &[PackageMapping] = &[
    entry("pillow", "PIL", "Pillow"),
    entry("beautifulsoup4", "bs4", "Beautiful Soup"),
    entry("python-docx", "docx", "python-docx"),
    entry("pyyaml", "yaml", "PyYAML"),
    entry("python-magic", "magic", "python-magic"),
    entry("scikit-learn", "sklearn", "scikit-learn"),
    entry("opencv-python", "cv2", "OpenCV"),
    entry("matplotlib", "matplotlib.pyplot", "Matplotlib"),
    entry("tensorflow", "tensorflow", "TensorFlow"),
    entry("torch", "torch", "PyTorch"),
    entry("nltk", "nltk", "NLTK"),
    entry("scipy", "scipy", "SciPy"),
    entry("numpy", "numpy", "NumPy"),
    entry("pandas", "pandas", "Pandas"),
    entry("seaborn", "seaborn", "Seaborn"),
    entry("requests", "requests", "Requests"),
    entry("flask", "flask", "Flask"),
    entry("django", "django", "Django"),
    entry("sqlalchemy", "sqlalchemy", "SQLAlchemy"),
    entry("pytest", "pytest", "pytest"),
    entry("ipython", "IPython", "IPython"),
];

/// Look up a distribution name in the built-in table.
///
/// The lookup is case-insensitive.
pub fn lookup(distribution: &str) -> Option<&'static PackageMapping> {
    let key = distribution.to_lowercase();
    PACKAGE_MAPPINGS.iter().find(|m| m.distribution == key)
}
