// src/common/serialize.rs

use bson::{Bson, Document};
use serde_json::{Map, Value};

// Esta é a ÚNICA costura entre a representação de armazenamento (BSON) e a
// representação de fio (JSON). Todos os handlers passam por aqui: nada de
// repetir conversão de `_id` endpoint por endpoint.

/// Converte um documento do banco para o JSON que o cliente espera:
/// `_id` (ObjectId) vira sua string hex canônica e datas viram RFC 3339.
/// Documento vazio permanece vazio: não inventamos campos.
pub fn serialize_doc(doc: Document) -> Value {
    let mut map = Map::with_capacity(doc.len());
    for (key, value) in doc {
        map.insert(key, bson_to_json(value));
    }
    Value::Object(map)
}

/// Conveniência para listas de documentos.
pub fn serialize_docs(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(serialize_doc).collect())
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
        Bson::Document(doc) => serialize_doc(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        // Escalares (string, números, bool, null) já têm forma JSON natural.
        other => other.into_relaxed_extjson(),
    }
}
