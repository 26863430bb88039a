//! Category catalog — the static table of persona categories.
//!
//! Each entry lists the signals that pull a repository towards the category
//! (languages, topics, keywords) and the presentation metadata used when the
//! category becomes an active persona. Scoring code only ever iterates this
//! table; adding a category means adding a row.

use serde::Serialize;

/// Id of the easter-egg category that scoring never activates on its own.
pub const EASTER_EGG_ID: &str = "dad";

// ─────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────

/// Where a persona's technology stack comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "kebab-case")]
pub enum StackPool {
    /// Explicit technology list.
    Fixed(&'static [&'static str]),
    /// Built from the user's matching repositories.
    Derived,
}

/// One persona category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    /// Title prefixes; the first one is the default.
    pub prefixes: &'static [&'static str],
    pub taglines: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
    pub gradient: [&'static str; 2],
    pub stat_labels: &'static [&'static str],
    pub stack: StackPool,
    pub languages: &'static [&'static str],
    pub topics: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

impl Category {
    /// Whether automatic activation must skip this category.
    pub fn is_reserved(&self) -> bool {
        is_reserved(self.id)
    }

    /// Prefix used when experience estimation yields nothing.
    pub fn default_prefix(&self) -> Option<&'static str> {
        self.prefixes.first().copied()
    }

    pub fn lookup(id: &str) -> Option<&'static Category> {
        lookup(id)
    }
}

/// Whether `id` names the reserved easter-egg category.
pub fn is_reserved(id: &str) -> bool {
    id.eq_ignore_ascii_case(EASTER_EGG_ID)
}

/// The full catalog, in display order.
pub fn all() -> &'static [Category] {
    CATEGORIES
}

/// Find a category by id (case-insensitive).
pub fn lookup(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

// ─────────────────────────────────────────────────────────────────
// Catalog Data
// ─────────────────────────────────────────────────────────────────

static CATEGORIES: &[Category] = &[
    Category {
        id: "systems",
        title: "Systems Engineer",
        prefixes: &["Bare-Metal", "Low-Level"],
        taglines: &[
            "Speaks fluent pointer arithmetic",
            "Zero-cost abstractions, nonzero opinions",
            "Knows what the allocator is doing",
        ],
        icon: "⚙️",
        color: "#f74c00",
        gradient: ["#f74c00", "#8b2500"],
        stat_labels: &["Memory Safety", "Performance", "Concurrency", "Toolchain"],
        stack: StackPool::Derived,
        languages: &["Rust", "C", "C++", "Zig", "Assembly"],
        topics: &[
            "rust",
            "systems-programming",
            "embedded",
            "kernel",
            "compiler",
            "operating-system",
            "low-level",
            "webassembly",
            "firmware",
            "bare-metal",
        ],
        keywords: &[
            "kernel",
            "compiler",
            "embedded",
            "allocator",
            "runtime",
            "firmware",
            "interpreter",
            "operating system",
        ],
    },
    Category {
        id: "platform",
        title: "Platform Engineer",
        prefixes: &[],
        taglines: &[
            "Paves the road everyone else drives on",
            "Turns tickets into self-service",
            "Has opinions about YAML indentation",
        ],
        icon: "🏗️",
        color: "#326ce5",
        gradient: ["#326ce5", "#1a3a7a"],
        stat_labels: &["Automation", "Reliability", "Scale", "Observability"],
        stack: StackPool::Fixed(&[
            "Kubernetes",
            "Docker",
            "Terraform",
            "Helm",
            "Prometheus",
            "Grafana",
            "Argo CD",
            "GitHub Actions",
            "Go",
            "Envoy",
            "Istio",
        ]),
        languages: &["Go", "HCL", "Dockerfile", "Jsonnet"],
        topics: &[
            "kubernetes",
            "docker",
            "devops",
            "ci-cd",
            "infrastructure",
            "terraform",
            "helm",
            "observability",
            "platform-engineering",
            "gitops",
            "prometheus",
        ],
        keywords: &[
            "kubernetes",
            "deploy",
            "infrastructure",
            "container",
            "platform",
            "orchestration",
            "observability",
            "monitoring",
        ],
    },
    Category {
        id: "cloud",
        title: "Cloud Architect",
        prefixes: &["Multi-Cloud"],
        taglines: &[
            "Someone else's computer, expertly arranged",
            "Thinks in regions and availability zones",
        ],
        icon: "☁️",
        color: "#ff9900",
        gradient: ["#ff9900", "#b35900"],
        stat_labels: &["Architecture", "Cost Control", "Resilience", "Security"],
        stack: StackPool::Fixed(&[
            "AWS",
            "GCP",
            "Azure",
            "Terraform",
            "Lambda",
            "CloudFormation",
            "Pulumi",
            "Serverless",
        ]),
        languages: &["HCL", "Bicep"],
        topics: &[
            "aws",
            "gcp",
            "azure",
            "cloud",
            "serverless",
            "lambda",
            "cloudformation",
            "cloud-native",
            "multi-cloud",
        ],
        keywords: &["cloud", "serverless", "lambda", "azure", "multi-region", "scalable"],
    },
    Category {
        id: "linux",
        title: "Linux Enthusiast",
        prefixes: &["Terminal-Dwelling"],
        taglines: &[
            "Has rewritten their dotfiles this week",
            "Home row or nothing",
            "Compiles their own kernel for fun",
        ],
        icon: "🐧",
        color: "#fcc624",
        gradient: ["#fcc624", "#8a6d00"],
        stat_labels: &["Shell Fu", "Customization", "Automation", "Uptime"],
        stack: StackPool::Derived,
        languages: &["Shell", "Nix", "Vim Script", "Emacs Lisp"],
        topics: &[
            "linux",
            "dotfiles",
            "nixos",
            "arch-linux",
            "vim",
            "neovim",
            "shell",
            "terminal",
            "tmux",
            "zsh",
            "bash",
        ],
        keywords: &[
            "linux",
            "dotfiles",
            "terminal",
            "shell",
            "neovim",
            "desktop",
            "window manager",
        ],
    },
    Category {
        id: "security",
        title: "Security Researcher",
        prefixes: &[],
        taglines: &[
            "Reads CVEs with morning coffee",
            "Trusts nothing, verifies everything",
        ],
        icon: "🛡️",
        color: "#d32f2f",
        gradient: ["#d32f2f", "#5c0f0f"],
        stat_labels: &["Offense", "Defense", "Cryptography", "Forensics"],
        stack: StackPool::Fixed(&[
            "Burp Suite",
            "Ghidra",
            "Wireshark",
            "Metasploit",
            "Nmap",
            "AFL++",
            "YARA",
            "Python",
        ]),
        languages: &["YARA"],
        topics: &[
            "security",
            "pentest",
            "ctf",
            "exploit",
            "cryptography",
            "malware",
            "infosec",
            "fuzzing",
            "vulnerability",
            "reverse-engineering",
            "osint",
        ],
        keywords: &[
            "security",
            "exploit",
            "vulnerability",
            "pentest",
            "cryptography",
            "fuzzer",
            "malware",
            "attack",
        ],
    },
    Category {
        id: "data",
        title: "Data Engineer",
        prefixes: &[],
        taglines: &[
            "Moves bytes from where they are to where they matter",
            "Every dashboard has a pipeline behind it",
        ],
        icon: "🗄️",
        color: "#336791",
        gradient: ["#336791", "#162c3e"],
        stat_labels: &["Modeling", "Throughput", "Quality", "Querying"],
        stack: StackPool::Derived,
        languages: &["SQL", "Scala", "R", "PLpgSQL"],
        topics: &[
            "data-engineering",
            "etl",
            "spark",
            "database",
            "analytics",
            "kafka",
            "airflow",
            "sql",
            "postgres",
            "data-pipeline",
            "dbt",
            "warehouse",
        ],
        keywords: &[
            "database",
            "analytics",
            "warehouse",
            "streaming",
            "dataset",
            "query",
            "pipeline",
        ],
    },
    Category {
        id: "ml",
        title: "ML Engineer",
        prefixes: &["Applied"],
        taglines: &[
            "Gradient descent into madness",
            "Turns GPUs into opinions",
            "Has a notebook for that",
        ],
        icon: "🧠",
        color: "#ee4c2c",
        gradient: ["#ee4c2c", "#7a1f0f"],
        stat_labels: &["Modeling", "Data Wrangling", "Research", "Deployment"],
        stack: StackPool::Fixed(&[
            "PyTorch",
            "TensorFlow",
            "JAX",
            "Hugging Face",
            "scikit-learn",
            "NumPy",
            "Pandas",
            "CUDA",
            "ONNX",
            "LangChain",
            "MLflow",
        ]),
        languages: &["Python", "Jupyter Notebook", "Julia", "Cuda"],
        topics: &[
            "machine-learning",
            "deep-learning",
            "pytorch",
            "tensorflow",
            "llm",
            "nlp",
            "ai",
            "computer-vision",
            "neural-network",
            "transformers",
        ],
        keywords: &[
            "neural",
            "machine learning",
            "training",
            "transformer",
            "inference",
            "embedding",
        ],
    },
    Category {
        id: "frontend",
        title: "Frontend Developer",
        prefixes: &["Pixel-Perfect"],
        taglines: &[
            "Centers divs professionally",
            "Ships the part users actually see",
        ],
        icon: "🎨",
        color: "#61dafb",
        gradient: ["#61dafb", "#1f6f85"],
        stat_labels: &["UI Craft", "Accessibility", "Performance", "Design Systems"],
        stack: StackPool::Derived,
        languages: &["TypeScript", "JavaScript", "CSS", "HTML", "Vue", "Svelte", "SCSS"],
        topics: &[
            "react",
            "vue",
            "svelte",
            "frontend",
            "css",
            "nextjs",
            "ui",
            "tailwindcss",
            "web",
            "angular",
            "design-system",
        ],
        keywords: &[
            "react",
            "frontend",
            "component",
            "browser",
            "website",
            "design system",
            "animation",
        ],
    },
    Category {
        id: "backend",
        title: "Backend Engineer",
        prefixes: &[],
        taglines: &[
            "Keeps the APIs honest",
            "Lives between the load balancer and the database",
        ],
        icon: "🔌",
        color: "#6db33f",
        gradient: ["#6db33f", "#2f5a14"],
        stat_labels: &["API Design", "Data Modeling", "Scalability", "Testing"],
        stack: StackPool::Fixed(&[
            "PostgreSQL",
            "Redis",
            "gRPC",
            "GraphQL",
            "Kafka",
            "Docker",
            "Spring",
            "Django",
            "Node.js",
        ]),
        languages: &["Java", "Kotlin", "Ruby", "PHP", "Elixir", "C#"],
        topics: &[
            "api",
            "rest",
            "graphql",
            "backend",
            "microservices",
            "grpc",
            "server",
            "django",
            "rails",
            "spring-boot",
            "fastapi",
        ],
        keywords: &[
            "backend",
            "server",
            "microservice",
            "graphql",
            "endpoint",
            "rest api",
            "web framework",
        ],
    },
    Category {
        id: "mobile",
        title: "Mobile Developer",
        prefixes: &[],
        taglines: &[
            "Fits the whole product in a pocket",
            "Fights app store review and wins",
        ],
        icon: "📱",
        color: "#a4c639",
        gradient: ["#a4c639", "#4d5e1a"],
        stat_labels: &["Native APIs", "UX Polish", "Offline Support", "Release Craft"],
        stack: StackPool::Fixed(&[
            "Swift",
            "Kotlin",
            "SwiftUI",
            "Jetpack Compose",
            "Flutter",
            "React Native",
            "Xcode",
        ]),
        languages: &["Swift", "Dart", "Objective-C", "Kotlin"],
        topics: &[
            "ios",
            "android",
            "flutter",
            "react-native",
            "mobile",
            "swiftui",
            "jetpack-compose",
        ],
        keywords: &["mobile", "android", "iphone", "flutter", "swiftui"],
    },
    Category {
        id: "gamedev",
        title: "Game Developer",
        prefixes: &["Indie"],
        taglines: &[
            "Sixty frames per second or bust",
            "Turns math into fun",
        ],
        icon: "🎮",
        color: "#9b59b6",
        gradient: ["#9b59b6", "#4a2358"],
        stat_labels: &["Gameplay", "Graphics", "Physics", "Polish"],
        stack: StackPool::Derived,
        languages: &["GDScript", "GLSL", "HLSL", "ShaderLab"],
        topics: &[
            "game",
            "gamedev",
            "unity",
            "godot",
            "game-engine",
            "opengl",
            "vulkan",
            "graphics",
            "bevy",
            "shaders",
        ],
        keywords: &["game", "shader", "render", "graphics", "sprite", "physics"],
    },
    Category {
        id: "devtools",
        title: "Developer Tools Builder",
        prefixes: &[],
        taglines: &[
            "Builds the tools that build the software",
            "Automates the boring parts",
        ],
        icon: "🛠️",
        color: "#24292e",
        gradient: ["#4a5560", "#24292e"],
        stat_labels: &["Ergonomics", "Automation", "Integration", "Documentation"],
        stack: StackPool::Derived,
        languages: &[],
        topics: &[
            "cli",
            "developer-tools",
            "devtools",
            "productivity",
            "editor",
            "lsp",
            "vscode-extension",
            "linter",
            "formatter",
            "git",
        ],
        keywords: &[
            "command line",
            "developer",
            "tooling",
            "linter",
            "formatter",
            "plugin",
            "productivity",
        ],
    },
    Category {
        id: EASTER_EGG_ID,
        title: "Dad Joke Engineer",
        prefixes: &["Certified"],
        taglines: &[
            "I'd tell you a UDP joke, but you might not get it",
            "Hi hungry, I'm Dad",
        ],
        icon: "🧔",
        color: "#8d6e63",
        gradient: ["#8d6e63", "#3e2723"],
        stat_labels: &["Puns", "Grilling", "Thermostat Control", "Lawn Care"],
        stack: StackPool::Fixed(&["Puns", "Grill", "Socks & Sandals", "Cargo Shorts"]),
        languages: &[],
        topics: &["dad-jokes", "jokes", "humor", "puns"],
        keywords: &["joke", "jokes", "humor", "puns"],
    },
];

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
