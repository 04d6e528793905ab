//! Python language definition

use super::LanguageDefinition;
use crate::stack::LanguageId;

pub struct PythonLanguage;

impl LanguageDefinition for PythonLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Python
    }

    fn aliases(&self) -> &[&'static str] {
        &["py"]
    }

    fn extensions(&self) -> &[&'static str] {
        &["py"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["requirements.txt", "pyproject.toml", "setup.py", "Pipfile"]
    }

    fn tools_for(&self, manifest_name: &str) -> &[&'static str] {
        match manifest_name {
            "Pipfile" => &["pipenv"],
            _ => &["pip"],
        }
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        &["venv", ".venv", "__pycache__", ".tox", ".pytest_cache"]
    }

    fn is_entrypoint(&self, file_name: &str) -> bool {
        matches!(file_name, "manage.py" | "app.py" | "main.py" | "wsgi.py")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_entrypoints() {
        assert!(PythonLanguage.is_entrypoint("manage.py"));
        assert!(!PythonLanguage.is_entrypoint("utils.py"));
    }

    #[test]
    fn test_python_tools() {
        assert_eq!(PythonLanguage.tools_for("requirements.txt"), &["pip"]);
        assert_eq!(PythonLanguage.tools_for("Pipfile"), &["pipenv"]);
    }
}
