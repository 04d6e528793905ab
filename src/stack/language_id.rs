crate::define_id_enum! {
    /// Languages the classifier can attribute bytes to
    LanguageId {
        Go => "go" : "Go" | "golang",
        Java => "java" : "Java",
        JavaScript => "javascript" : "JavaScript" | "js" | "node" | "nodejs",
        TypeScript => "typescript" : "TypeScript" | "ts",
        Python => "python" : "Python" | "py",
        Rust => "rust" : "Rust",
        CSharp => "csharp" : "C#" | "dotnet",
        Php => "php" : "PHP",
        Ruby => "ruby" : "Ruby",
    }
}
