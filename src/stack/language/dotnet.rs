//! C# language definition (.NET SDK projects)

use super::LanguageDefinition;
use crate::stack::LanguageId;

pub struct DotNetLanguage;

impl LanguageDefinition for DotNetLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::CSharp
    }

    fn aliases(&self) -> &[&'static str] {
        &["csharp", "dotnet"]
    }

    fn extensions(&self) -> &[&'static str] {
        &["cs"]
    }

    fn manifest_files(&self) -> &[&'static str] {
        &["*.csproj"]
    }

    fn tools_for(&self, _manifest_name: &str) -> &[&'static str] {
        &[".NET"]
    }

    fn excluded_dirs(&self) -> &[&'static str] {
        &["bin", "obj"]
    }
}
