crate::define_id_enum! {
    /// Frameworks with a registered detector
    FrameworkId {
        SpringBoot => "spring-boot" : "Spring Boot",
        SpringCloud => "spring-cloud" : "Spring Cloud",
        Quarkus => "quarkus" : "Quarkus",
        Micronaut => "micronaut" : "Micronaut",
        OpenLiberty => "openliberty" : "OpenLiberty" | "open liberty",
        JakartaEe => "jakartaee" : "JakartaEE" | "jakarta ee",
        WebSphere => "websphere" : "WebSphere",
        WebLogic => "weblogic" : "WebLogic",
        Express => "express" : "Express",
        Vue => "vue" : "Vue",
        Nuxt => "nuxt" : "Nuxt" | "nuxt.js",
        Gin => "gin" : "Gin",
        Echo => "echo" : "Echo",
        FastHttp => "fasthttp" : "FastHttp",
        NetHttp => "net-http" : "net/http",
        Flask => "flask" : "Flask",
        Django => "django" : "Django",
    }
}
