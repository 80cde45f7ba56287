//! # Stack Selection Module
//!
//! Models the five technology choices that drive scaffold generation:
//! frontend framework, backend framework, database, data-fetch method, and
//! interface type.
//!
//! Each selection is parsed from a plain input string. Values outside the
//! recognized tables are carried losslessly as `Unknown(..)` so the scaffold
//! header can still name them; fragment lookup for an unknown value yields
//! nothing, and the corresponding section is emitted without a code block.

use std::fmt;

/// Recognized frontend frameworks.
pub const FRONTENDS: [&str; 3] = ["ReactJS", "Angular", "VueJS"];
/// Recognized backend frameworks.
pub const BACKENDS: [&str; 3] = ["NodeJS", "Django", "Flask"];
/// Recognized databases.
pub const DATABASES: [&str; 4] = ["MySQL", "PostgreSQL", "MongoDB", "SQLite"];
/// Recognized data-fetch methods.
pub const DATA_FETCH_METHODS: [&str; 3] = ["REST API", "GraphQL", "WebSockets"];
/// Recognized interface types.
pub const INTERFACE_TYPES: [&str; 3] = ["Display Data", "Enter Data", "Display and Enter Data"];

/// Frontend framework selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frontend {
    React,
    Angular,
    Vue,
    /// Value outside the recognized table; kept verbatim for display
    Unknown(String),
}

impl Frontend {
    /// Parse a plain input string; unrecognized values are preserved as-is
    pub fn parse(input: &str) -> Self {
        match input {
            "ReactJS" => Frontend::React,
            "Angular" => Frontend::Angular,
            "VueJS" => Frontend::Vue,
            other => Frontend::Unknown(other.to_string()),
        }
    }

    /// Display name as supplied by the caller
    pub fn name(&self) -> &str {
        match self {
            Frontend::React => "ReactJS",
            Frontend::Angular => "Angular",
            Frontend::Vue => "VueJS",
            Frontend::Unknown(s) => s,
        }
    }

    /// Frontend-setup boilerplate, `None` for unrecognized values
    pub fn fragment(&self) -> Option<&'static str> {
        match self {
            Frontend::React => {
                Some("import React from 'react';\n// Add React components and pages here...")
            }
            Frontend::Angular => Some(
                "import { Component } from '@angular/core';\n// Add Angular components and pages here...",
            ),
            Frontend::Vue => Some("import Vue from 'vue';\n// Add Vue components and pages here..."),
            Frontend::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend framework selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    NodeJs,
    Django,
    Flask,
    /// Value outside the recognized table; kept verbatim for display
    Unknown(String),
}

impl Backend {
    /// Parse a plain input string; unrecognized values are preserved as-is
    pub fn parse(input: &str) -> Self {
        match input {
            "NodeJS" => Backend::NodeJs,
            "Django" => Backend::Django,
            "Flask" => Backend::Flask,
            other => Backend::Unknown(other.to_string()),
        }
    }

    /// Display name as supplied by the caller
    pub fn name(&self) -> &str {
        match self {
            Backend::NodeJs => "NodeJS",
            Backend::Django => "Django",
            Backend::Flask => "Flask",
            Backend::Unknown(s) => s,
        }
    }

    /// Backend-setup boilerplate, `None` for unrecognized values
    ///
    /// The NodeJS fragment names the selected database in its integration
    /// comment, so the database selection is part of the lookup.
    pub fn fragment(&self, database: &Database) -> Option<String> {
        match self {
            Backend::NodeJs => Some(format!(
                "const express = require('express');\nconst app = express();\n// Add routes and database integration ({}) here...",
                database.name()
            )),
            Backend::Django => Some(
                "import django\n# Setup Django views, models, and database connections here..."
                    .to_string(),
            ),
            Backend::Flask => Some(
                "from flask import Flask\napp = Flask(__name__)\n# Add Flask routes and database integration here..."
                    .to_string(),
            ),
            Backend::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Database selection
///
/// Databases contribute no fragment of their own; the selected name is
/// interpolated into the header and the NodeJS backend fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
    MySql,
    PostgreSql,
    MongoDb,
    Sqlite,
    /// Value outside the recognized table; kept verbatim for display
    Unknown(String),
}

impl Database {
    /// Parse a plain input string; unrecognized values are preserved as-is
    pub fn parse(input: &str) -> Self {
        match input {
            "MySQL" => Database::MySql,
            "PostgreSQL" => Database::PostgreSql,
            "MongoDB" => Database::MongoDb,
            "SQLite" => Database::Sqlite,
            other => Database::Unknown(other.to_string()),
        }
    }

    /// Display name as supplied by the caller
    pub fn name(&self) -> &str {
        match self {
            Database::MySql => "MySQL",
            Database::PostgreSql => "PostgreSQL",
            Database::MongoDb => "MongoDB",
            Database::Sqlite => "SQLite",
            Database::Unknown(s) => s,
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data-fetch method selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFetch {
    RestApi,
    GraphQl,
    WebSockets,
    /// Value outside the recognized table; kept verbatim for display
    Unknown(String),
}

impl DataFetch {
    /// Parse a plain input string; unrecognized values are preserved as-is
    pub fn parse(input: &str) -> Self {
        match input {
            "REST API" => DataFetch::RestApi,
            "GraphQL" => DataFetch::GraphQl,
            "WebSockets" => DataFetch::WebSockets,
            other => DataFetch::Unknown(other.to_string()),
        }
    }

    /// Display name as supplied by the caller
    pub fn name(&self) -> &str {
        match self {
            DataFetch::RestApi => "REST API",
            DataFetch::GraphQl => "GraphQL",
            DataFetch::WebSockets => "WebSockets",
            DataFetch::Unknown(s) => s,
        }
    }

    /// Data-fetch boilerplate, `None` for unrecognized values
    pub fn fragment(&self) -> Option<&'static str> {
        match self {
            DataFetch::RestApi => Some(
                "fetch('/api/data').then(response => response.json()).then(data => console.log(data));",
            ),
            DataFetch::GraphQl => Some(
                "fetch('/graphql', { method: 'POST', body: JSON.stringify({ query: '{ allData { id name } }' }) });",
            ),
            DataFetch::WebSockets => Some(
                "const socket = new WebSocket('ws://localhost:8080');\nsocket.onmessage = (event) => { console.log(event.data); };",
            ),
            DataFetch::Unknown(_) => None,
        }
    }
}

impl fmt::Display for DataFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interface type selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceType {
    DisplayData,
    EnterData,
    DisplayAndEnterData,
    /// Value outside the recognized table; kept verbatim for display
    Unknown(String),
}

impl InterfaceType {
    /// Parse a plain input string; unrecognized values are preserved as-is
    pub fn parse(input: &str) -> Self {
        match input {
            "Display Data" => InterfaceType::DisplayData,
            "Enter Data" => InterfaceType::EnterData,
            "Display and Enter Data" => InterfaceType::DisplayAndEnterData,
            other => InterfaceType::Unknown(other.to_string()),
        }
    }

    /// Display name as supplied by the caller
    pub fn name(&self) -> &str {
        match self {
            InterfaceType::DisplayData => "Display Data",
            InterfaceType::EnterData => "Enter Data",
            InterfaceType::DisplayAndEnterData => "Display and Enter Data",
            InterfaceType::Unknown(s) => s,
        }
    }

    /// Closing guidance comment, `None` for unrecognized values
    pub fn note(&self) -> Option<&'static str> {
        match self {
            InterfaceType::DisplayData => Some(
                "# Display data interface (Frontend) - Use the frontend library to display data here.",
            ),
            InterfaceType::EnterData => Some(
                "# Enter data interface (Frontend) - Use the frontend library to create forms for data entry.",
            ),
            InterfaceType::DisplayAndEnterData => {
                Some("# Display and Enter Data - Combine data display and forms for entry here.")
            }
            InterfaceType::Unknown(_) => None,
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full five-field technology selection driving one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSelection {
    pub frontend: Frontend,
    pub backend: Backend,
    pub database: Database,
    pub data_fetch: DataFetch,
    pub interface_type: InterfaceType,
}

impl StackSelection {
    /// Build a selection from the five plain input strings
    pub fn from_inputs(
        frontend: &str,
        backend: &str,
        database: &str,
        data_fetch: &str,
        interface_type: &str,
    ) -> Self {
        StackSelection {
            frontend: Frontend::parse(frontend),
            backend: Backend::parse(backend),
            database: Database::parse(database),
            data_fetch: DataFetch::parse(data_fetch),
            interface_type: InterfaceType::parse(interface_type),
        }
    }

    /// Fields whose values fall outside the recognized tables, as
    /// `(field, raw value)` pairs. Empty when every selection is recognized.
    pub fn unrecognized(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Frontend::Unknown(v) = &self.frontend {
            out.push(("frontend", v.as_str()));
        }
        if let Backend::Unknown(v) = &self.backend {
            out.push(("backend", v.as_str()));
        }
        if let Database::Unknown(v) = &self.database {
            out.push(("database", v.as_str()));
        }
        if let DataFetch::Unknown(v) = &self.data_fetch {
            out.push(("data_fetch", v.as_str()));
        }
        if let InterfaceType::Unknown(v) = &self.interface_type {
            out.push(("interface_type", v.as_str()));
        }
        out
    }
}
