//! Built-in sample diagrams.
//!
//! These are the starting points offered by the editor's template bar, one
//! per supported diagram family. They double as realistic highlighting
//! fixtures.

/// A named sample diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Stable identifier, e.g. `flowchart`.
    pub id: &'static str,
    /// Human readable name.
    pub name: &'static str,
    /// Diagram source text.
    pub source: &'static str,
}

pub const FLOWCHART: Template = Template {
    id: "flowchart",
    name: "Flowchart",
    source: r#"flowchart TD
    A[Start] --> B{Is it working?}
    B -->|Yes| C[Great!]
    B -->|No| D[Debug]
    D --> E[Fix the issue]
    E --> B
    C --> F[Deploy]
    F --> G[End]

    style A fill:#06b6d4,stroke:#0891b2,color:#fff
    style G fill:#22c55e,stroke:#16a34a,color:#fff
    style B fill:#8b5cf6,stroke:#7c3aed,color:#fff"#,
};

pub const SEQUENCE: Template = Template {
    id: "sequence",
    name: "Sequence Diagram",
    source: r#"sequenceDiagram
    autonumber
    participant U as User
    participant C as Client
    participant S as Server
    participant DB as Database

    U->>C: Click Login
    C->>S: POST /api/login
    S->>DB: Query user
    DB-->>S: User data
    S-->>C: JWT Token
    C-->>U: Show Dashboard

    Note over U,DB: Authentication Flow"#,
};

pub const CLASS: Template = Template {
    id: "class",
    name: "Class Diagram",
    source: r#"classDiagram
    class Animal {
        +String name
        +int age
        +makeSound() void
        +move() void
    }

    class Dog {
        +String breed
        +bark() void
        +fetch() void
    }

    class Cat {
        +String color
        +meow() void
        +scratch() void
    }

    class Bird {
        +float wingspan
        +fly() void
        +sing() void
    }

    Animal <|-- Dog
    Animal <|-- Cat
    Animal <|-- Bird"#,
};

pub const STATE: Template = Template {
    id: "state",
    name: "State Diagram",
    source: r#"stateDiagram-v2
    [*] --> Idle

    Idle --> Processing: Submit
    Processing --> Success: Valid
    Processing --> Error: Invalid

    Success --> Idle: Reset
    Error --> Idle: Retry

    Success --> [*]: Complete

    state Processing {
        [*] --> Validating
        Validating --> Saving
        Saving --> [*]
    }"#,
};

pub const ER: Template = Template {
    id: "er",
    name: "ER Diagram",
    source: r#"erDiagram
    USER ||--o{ ORDER : places
    USER {
        int id PK
        string name
        string email
        date created_at
    }

    ORDER ||--|{ ORDER_ITEM : contains
    ORDER {
        int id PK
        int user_id FK
        date order_date
        string status
    }

    ORDER_ITEM }|--|| PRODUCT : includes
    ORDER_ITEM {
        int id PK
        int order_id FK
        int product_id FK
        int quantity
    }

    PRODUCT {
        int id PK
        string name
        float price
        int stock
    }"#,
};

pub const GANTT: Template = Template {
    id: "gantt",
    name: "Gantt Chart",
    source: r#"gantt
    title Project Development Timeline
    dateFormat YYYY-MM-DD

    section Planning
    Requirements     :done, req, 2024-01-01, 7d
    Design          :done, des, after req, 10d

    section Development
    Frontend        :active, fe, 2024-01-18, 20d
    Backend         :be, 2024-01-20, 18d
    API Integration :api, after fe, 10d

    section Testing
    Unit Tests      :ut, after be, 7d
    E2E Tests       :e2e, after api, 5d

    section Deployment
    Staging         :stage, after e2e, 3d
    Production      :prod, after stage, 2d"#,
};

/// The template shown when the editor starts.
pub const DEFAULT: Template = FLOWCHART;

const ALL: &[Template] = &[FLOWCHART, SEQUENCE, CLASS, STATE, ER, GANTT];

/// All built-in templates, in display order.
pub fn all() -> &'static [Template] {
    ALL
}

/// Look up a template by its identifier.
pub fn find(id: &str) -> Option<&'static Template> {
    ALL.iter().find(|template| template.id == id)
}
