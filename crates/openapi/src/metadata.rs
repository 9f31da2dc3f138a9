//! Document-level metadata: info, contact, license, servers, tags

use crate::types::{Contact, Info, License, Server, Tag};
use apidoc_common::Document;

pub(crate) fn new_info(doc: &Document) -> Info {
    Info {
        title: doc.title.clone(),
        description: doc.description.clone(),
        contact: doc.contact.as_ref().map(new_contact),
        license: doc.license.as_ref().map(new_license),
        version: doc.version.clone(),
    }
}

fn new_contact(contact: &apidoc_common::Contact) -> Contact {
    Contact {
        name: contact.name.clone(),
        url: contact.url.clone(),
        email: contact.email.clone(),
    }
}

fn new_license(license: &apidoc_common::License) -> License {
    License {
        name: license.name.clone(),
        url: license.url.clone(),
    }
}

/// Servers in declaration order, duplicates included
pub(crate) fn new_servers(servers: &[apidoc_common::Server]) -> Vec<Server> {
    servers
        .iter()
        .map(|srv| Server {
            url: srv.url.clone(),
            description: srv.description.clone(),
        })
        .collect()
}

pub(crate) fn new_tags(tags: &[apidoc_common::Tag]) -> Vec<Tag> {
    tags.iter()
        .map(|tag| Tag {
            name: tag.name.clone(),
            description: tag.description.clone(),
        })
        .collect()
}
